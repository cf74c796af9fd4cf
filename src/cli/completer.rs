//! 命令与顶点标签补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 命令列表
const COMMANDS: &[&str] = &[
    "incident", "path", "insert", "erase", "vertices", "stats", "help", "quit",
];

/// LabelGraph CLI 补全器
#[derive(Default)]
pub struct LabelCompleter {
    /// 当前图中的顶点标签
    labels: Vec<String>,
}

impl LabelCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 更新可补全的顶点标签（图变化后调用）
    pub fn set_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
    }

    /// 候选词：第一个单词补全命令，其余位置补全顶点标签
    fn candidates(&self, line_to_cursor: &str) -> (usize, Vec<Pair>) {
        // 空白可能是多字节字符（如全角空格）
        let start = line_to_cursor
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let current = &line_to_cursor[start..];
        let first_word = line_to_cursor[..start].trim().is_empty();

        let pairs = if first_word {
            let lowered = current.to_lowercase();
            COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(&lowered))
                .map(|cmd| pair(cmd))
                .collect()
        } else {
            self.labels
                .iter()
                .filter(|l| l.starts_with(current))
                .map(|l| pair(l))
                .collect()
        };

        (start, pairs)
    }
}

fn pair(s: &str) -> Pair {
    Pair {
        display: s.to_string(),
        replacement: s.to_string(),
    }
}

impl Completer for LabelCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

impl Hinter for LabelCompleter {
    type Hint = String;
}

impl Highlighter for LabelCompleter {}

impl Validator for LabelCompleter {}

impl Helper for LabelCompleter {}
