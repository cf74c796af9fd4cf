//! 控制台命令处理
//!
//! 把一行输入解析为 [`Command`]，并在图上执行

use super::printer::Printer;
use crate::error::{Error, Result};
use crate::graph::Graph;

/// 控制台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 列出顶点的关联边
    Incident(String),
    /// 查找两点之间的路径
    Path(String, String),
    /// 插入边
    Insert {
        from: String,
        to: String,
        label: String,
    },
    /// 删除顶点（级联删除关联边）
    Erase(String),
    /// 列出所有顶点
    Vertices,
    /// 图统计信息
    Stats,
    Help,
    Quit,
}

/// 命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 菜单编号对应的命令名（兼容 1-5 的数字菜单）
pub fn menu_alias(choice: &str) -> Option<&'static str> {
    match choice {
        "1" => Some("incident"),
        "2" => Some("path"),
        "3" => Some("insert"),
        "4" => Some("erase"),
        "5" => Some("quit"),
        _ => None,
    }
}

/// 命令需要的参数个数
pub fn arity(name: &str) -> usize {
    match name {
        "incident" | "erase" => 1,
        "path" => 2,
        "insert" => 3,
        _ => 0,
    }
}

impl Command {
    /// 解析一行输入（参数按空白切分）
    pub fn parse(input: &str) -> Result<Self> {
        let mut words = input.split_whitespace();
        let Some(first) = words.next() else {
            return Err(Error::Parse("空命令".to_string()));
        };
        let lowered = first.to_lowercase();
        let name = menu_alias(&lowered).unwrap_or(lowered.as_str());
        Self::from_args(name, words.map(str::to_string).collect())
    }

    /// 由命令名和已拆分好的参数构造命令；参数原样保留，可含空格
    pub fn from_args(name: &str, args: Vec<String>) -> Result<Self> {
        let name = canonical(name);
        if args.len() < arity(name) {
            return Err(Error::Parse(usage(name).to_string()));
        }
        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or_default();

        let command = match name {
            "incident" => Command::Incident(next()),
            "path" => Command::Path(next(), next()),
            "insert" => Command::Insert {
                from: next(),
                to: next(),
                label: next(),
            },
            "erase" => Command::Erase(next()),
            "vertices" => Command::Vertices,
            "stats" => Command::Stats,
            "help" => Command::Help,
            "quit" => Command::Quit,
            _ => {
                return Err(Error::Parse(format!(
                    "未知命令: {}。输入 'help' 查看帮助。",
                    name
                )))
            }
        };
        Ok(command)
    }
}

/// 别名归一化为主命令名
fn canonical(name: &str) -> &str {
    match name {
        "edges" | "i" => "incident",
        "p" => "path",
        "add" => "insert",
        "remove" | "rm" => "erase",
        "ls" => "vertices",
        "info" => "stats",
        "h" | "?" => "help",
        "exit" | "q" => "quit",
        other => other,
    }
}

fn usage(name: &str) -> &'static str {
    match name {
        "incident" => "用法: incident <顶点>",
        "path" => "用法: path <起点> <终点>",
        "insert" => "用法: insert <顶点1> <顶点2> <边标签>",
        "erase" => "用法: erase <顶点>",
        _ => "输入 'help' 查看帮助",
    }
}

/// 在图上执行命令
pub fn execute_command(graph: &mut Graph, command: Command, printer: &Printer) -> CommandResult {
    match command {
        Command::Quit => CommandResult::Exit,

        Command::Help => CommandResult::Message(Printer::help()),

        Command::Stats => {
            CommandResult::Message(printer.stats(graph.vertex_count(), graph.edge_count()))
        }

        Command::Vertices => CommandResult::Message(printer.vertices(graph)),

        Command::Incident(label) => match graph.list_incident_edges(&label) {
            Ok(edges) => CommandResult::Message(printer.incident_edges(&label, &edges)),
            Err(Error::VertexNotFound(_)) => {
                CommandResult::Error(format!("顶点 {} 不存在", label))
            }
            Err(e) => CommandResult::Error(e.to_string()),
        },

        Command::Path(start, end) => match graph.find_path(&start, &end) {
            Ok(Some(path)) => CommandResult::Message(printer.path(&start, &end, &path)),
            Ok(None) => CommandResult::Message(printer.no_path(&start, &end)),
            Err(Error::VertexNotFound(_)) => {
                CommandResult::Error("顶点无效，请输入存在的顶点".to_string())
            }
            Err(e) => CommandResult::Error(e.to_string()),
        },

        Command::Insert { from, to, label } => {
            match graph.insert_edge_checked(&from, &to, label.as_str()) {
                Ok(_) => CommandResult::Message(format!(
                    "已在 {} 和 {} 之间添加边 {}",
                    from, to, label
                )),
                Err(Error::VertexNotFound(_)) => {
                    CommandResult::Error("插入失败: 顶点不存在".to_string())
                }
                Err(Error::EdgeAlreadyExists(..)) => {
                    CommandResult::Error("插入失败: 边已存在".to_string())
                }
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }

        Command::Erase(label) => match graph.erase_vertex_by_label(&label) {
            Ok(_) => CommandResult::Message(format!("已删除顶点 {}", label)),
            Err(Error::VertexNotFound(_)) => {
                CommandResult::Error(format!("顶点 {} 不存在", label))
            }
            Err(e) => CommandResult::Error(e.to_string()),
        },
    }
}

/// 解析并执行一行输入
pub fn run_line(graph: &mut Graph, input: &str, printer: &Printer) -> CommandResult {
    if input.trim().is_empty() {
        return CommandResult::Continue;
    }
    match Command::parse(input) {
        Ok(command) => execute_command(graph, command, printer),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::printer::OutputFormat;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        graph.insert_edge(a, b, "2").unwrap();
        graph.insert_edge(b, c, "3").unwrap();
        graph
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("incident A").unwrap(),
            Command::Incident("A".to_string())
        );
        assert_eq!(
            Command::parse("2 A C").unwrap(),
            Command::Path("A".to_string(), "C".to_string())
        );
        assert_eq!(
            Command::parse("INSERT A C 9").unwrap(),
            Command::Insert {
                from: "A".to_string(),
                to: "C".to_string(),
                label: "9".to_string(),
            }
        );
        assert_eq!(Command::parse("rm B").unwrap(), Command::Erase("B".to_string()));
        assert_eq!(Command::parse("5").unwrap(), Command::Quit);
    }

    #[test]
    fn test_from_args_keeps_spaces() {
        let command = Command::from_args(
            "insert",
            vec!["New York".to_string(), "Boston".to_string(), "215".to_string()],
        )
        .unwrap();
        assert_eq!(
            command,
            Command::Insert {
                from: "New York".to_string(),
                to: "Boston".to_string(),
                label: "215".to_string(),
            }
        );
        assert!(matches!(
            Command::from_args("path", vec!["New York".to_string()]),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_multiword_vertex_reachable_via_from_args() {
        let mut graph = Graph::new();
        let ny = graph.insert_vertex("New York");
        let boston = graph.insert_vertex("Boston");
        graph.insert_edge(ny, boston, "215").unwrap();
        let printer = Printer::new(OutputFormat::Text);

        let command = Command::from_args("incident", vec!["New York".to_string()]).unwrap();
        match execute_command(&mut graph, command, &printer) {
            CommandResult::Message(msg) => assert!(msg.contains("New York to Boston is 215")),
            other => panic!("unexpected result: {:?}", other),
        }

        let command = Command::from_args("erase", vec!["New York".to_string()]).unwrap();
        execute_command(&mut graph, command, &printer);
        assert!(!graph.has_vertex("New York"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse("path A"), Err(Error::Parse(_))));
        assert!(matches!(Command::parse("frobnicate"), Err(Error::Parse(_))));
        assert!(matches!(Command::parse("   "), Err(Error::Parse(_))));
    }

    #[test]
    fn test_execute_insert_and_duplicate() {
        let mut graph = sample_graph();
        let printer = Printer::new(OutputFormat::Table);

        let result = run_line(&mut graph, "insert A C 9", &printer);
        assert!(matches!(result, CommandResult::Message(_)));
        assert_eq!(graph.edge_count(), 3);

        let result = run_line(&mut graph, "insert C A 1", &printer);
        assert_eq!(
            result,
            CommandResult::Error("插入失败: 边已存在".to_string())
        );

        let result = run_line(&mut graph, "insert A Q 1", &printer);
        assert_eq!(
            result,
            CommandResult::Error("插入失败: 顶点不存在".to_string())
        );
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_execute_erase() {
        let mut graph = sample_graph();
        let printer = Printer::default();

        assert!(matches!(
            run_line(&mut graph, "erase B", &printer),
            CommandResult::Message(_)
        ));
        assert_eq!(graph.edge_count(), 0);
        assert!(matches!(
            run_line(&mut graph, "erase B", &printer),
            CommandResult::Error(_)
        ));
    }

    #[test]
    fn test_execute_path_text() {
        let mut graph = sample_graph();
        graph.insert_vertex("Z");
        let printer = Printer::new(OutputFormat::Text);

        match run_line(&mut graph, "path A C", &printer) {
            CommandResult::Message(msg) => assert!(msg.contains("A to B to C")),
            other => panic!("unexpected result: {:?}", other),
        }
        match run_line(&mut graph, "path A Z", &printer) {
            CommandResult::Message(msg) => assert!(msg.contains("未找到")),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            run_line(&mut graph, "path A Q", &printer),
            CommandResult::Error(_)
        ));
    }

    #[test]
    fn test_quit_and_blank() {
        let mut graph = sample_graph();
        let printer = Printer::default();

        assert_eq!(run_line(&mut graph, "q", &printer), CommandResult::Exit);
        assert_eq!(run_line(&mut graph, "", &printer), CommandResult::Continue);
    }
}
