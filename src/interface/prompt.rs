//! Prompt Collector: asks the operator for each field until it passes its rule.

use std::io::{BufRead, Write};

use console::style;
use tracing::debug;

use crate::domain::model::book::{BookRecord, PageCount};
use crate::domain::model::isbn::Isbn;
use crate::domain::model::publisher::Publisher;
use crate::domain::validation::{
    parse_isbn, parse_publisher_choice, require_text, Field, ValidationError,
};

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("falha no terminal: {0}")]
    Io(#[from] std::io::Error),

    #[error("entrada encerrada antes de concluir o cadastro")]
    InputClosed,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 検証済みレコードを1件収集する。
    pub fn collect_record(&mut self) -> Result<BookRecord, PromptError> {
        let title = self.ask("Qual é o título do livro?", |s| {
            require_text(Field::Title, s)
        })?;
        let author = self.ask("Qual é o autor do livro?", |s| {
            require_text(Field::Author, s)
        })?;
        let pages = self.ask("Qual é o número de páginas do livro?", |s| {
            require_text(Field::PageCount, s)
        })?;
        let publisher = self.choose_publisher()?;
        let isbn: Isbn = self.ask("Qual é o ISBN do livro?", parse_isbn)?;

        Ok(BookRecord::new(
            title,
            author,
            PageCount::Text(pages),
            publisher,
            isbn,
        ))
    }

    fn choose_publisher(&mut self) -> Result<Publisher, PromptError> {
        for (i, publisher) in Publisher::ALL.iter().enumerate() {
            writeln!(self.output, "  {}) {}", style(i + 1).cyan(), publisher)?;
        }
        self.ask("Qual é a editora do livro?", parse_publisher_choice)
    }

    /// `rule` が受理するまで `question` を繰り返す。
    fn ask<T>(
        &mut self,
        question: &str,
        rule: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, PromptError> {
        loop {
            write!(
                self.output,
                "{} {} ",
                style("?").green().bold(),
                style(question).bold()
            )?;
            self.output.flush()?;

            let line = self.read_line()?;
            match rule(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(error = %e, "answer rejected");
                    writeln!(self.output, "{} {}", style(">>").red(), e)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(buf)
    }
}
