use console::{style, StyledObject};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// 1イベント1行。色付きのレベル記号の後にフィールドを出力する。
pub struct CatalogFormatter;

impl<S, N> FormatEvent<S, N> for CatalogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let marker: StyledObject<&str> = match *event.metadata().level() {
            Level::TRACE => style("[ ]").dim(),
            Level::DEBUG => style("[?]").blue(),
            Level::INFO => style("[+]").green().bold(),
            Level::WARN => style("[*]").yellow().bold(),
            Level::ERROR => style("[-]").red().bold(),
        };

        write!(writer, "{} ", marker.for_stderr())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// stderr向けsubscriberを登録する。2回目以降は何もしない。
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .event_format(CatalogFormatter)
        .try_init();
}
