use std::io::{BufRead, Write};
use std::path::Path;

use console::style;

use super::prompt::{PromptError, Prompter};
use crate::application::error::PersistError;
use crate::application::service::CatalogService;
use crate::infra::json_store::JsonCatalogRepository;

/// コマンドライン未指定時のカタログ位置
pub const DEFAULT_STORE_PATH: &str = "database/database.json";

/// 対話セッション1回分：入力 → 表示 → 保存
pub fn run<R: BufRead, W: Write>(store_path: &Path, input: R, output: W) -> anyhow::Result<()> {
    let mut prompter = Prompter::new(input, output);
    writeln!(
        prompter.output_mut(),
        "{}",
        style("Bem-vindo ao Inventário de Livros Interativo!").cyan().bold()
    )?;

    let record = prompter.collect_record()?;

    let mut output = prompter.into_output();
    writeln!(output, "\n--- Livro Salvo ---")?;
    writeln!(output, "{record}")?;
    writeln!(output, "---------------------\n")?;

    let service = CatalogService::new(JsonCatalogRepository::new(store_path));
    service.save_record(record)?;

    writeln!(output, "{}", style("✅ livro inserido com sucesso!").green())?;
    Ok(())
}

/// 失敗時に表示する1行メッセージ
pub fn report(err: &anyhow::Error) -> String {
    if err.is::<PersistError>() || err.is::<PromptError>() {
        format!("❌ Erro: {err}")
    } else {
        format!("Ocorreu um erro desconhecido: {err:#}")
    }
}
