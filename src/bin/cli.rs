//! LabelGraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context as _;
use clap::Parser;
use colored::Colorize;
use labelgraph::cli::commands::{arity, menu_alias};
use labelgraph::cli::{
    execute_command, run_line, Command, CommandResult, LabelCompleter, OutputFormat, Printer,
};
use labelgraph::Graph;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

type LineEditor = Editor<LabelCompleter, DefaultHistory>;

#[derive(Parser, Debug)]
#[command(name = "labelgraph-cli")]
#[command(about = "LabelGraph 命令行工具", version)]
struct Args {
    /// 图文件路径（缺省时交互式输入）
    file: Option<PathBuf>,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// 不读写历史记录
    #[arg(long)]
    no_history: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut editor: LineEditor = Editor::new().context("无法初始化行编辑器")?;
    editor.set_helper(Some(LabelCompleter::new()));

    let path = match args.file {
        Some(path) => path,
        None => PathBuf::from(editor.readline("请输入文件名: ")?.trim()),
    };

    let (mut graph, load_error) = Graph::load_or_empty(&path);
    if let Some(e) = load_error {
        println!("{} {}", "警告:".yellow(), e);
    }
    refresh_labels(&mut editor, &graph);

    let printer = Printer::new(args.format);

    // 单个命令模式
    if let Some(line) = args.execute {
        report(run_line(&mut graph, &line, &printer));
        return Ok(());
    }

    println!("图已就绪: {} 个顶点, {} 条边", graph.vertex_count(), graph.edge_count());
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let history = if args.no_history {
        None
    } else {
        dirs::data_local_dir().map(|d| d.join("labelgraph_history"))
    };
    if let Some(ref h) = history {
        let _ = editor.load_history(h);
    }

    loop {
        let line = match editor.readline("labelgraph> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);

        let result = if menu_alias(line).is_some() {
            match prompt_menu_command(&mut editor, &graph, line)? {
                Some(command) => execute_command(&mut graph, command, &printer),
                None => continue,
            }
        } else {
            run_line(&mut graph, line, &printer)
        };

        if report(result) {
            break;
        }
        refresh_labels(&mut editor, &graph);
    }

    if let Some(ref h) = history {
        if let Err(e) = editor.save_history(h) {
            tracing::warn!(error = %e, "failed to save history");
        }
    }

    println!("再见！");
    Ok(())
}

/// 打印执行结果，返回是否退出
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => false,
        CommandResult::Exit => true,
        CommandResult::Message(msg) => {
            print!("{}", msg);
            if !msg.ends_with('\n') {
                println!();
            }
            false
        }
        CommandResult::Error(msg) => {
            println!("{} {}", "错误:".red(), msg);
            false
        }
    }
}

/// 只输入菜单编号时逐项提示参数
///
/// 回答原样作为参数，标签可以含空格。插入边在询问边标签之前先检查顶点和重复边。
fn prompt_menu_command(
    editor: &mut LineEditor,
    graph: &Graph,
    line: &str,
) -> anyhow::Result<Option<Command>> {
    let Some(name) = menu_alias(line) else {
        return Ok(None);
    };

    let prompts: &[&str] = match name {
        "incident" | "erase" => &["顶点标签: "],
        "path" => &["起点: ", "终点: "],
        "insert" => &["第一个顶点: ", "第二个顶点: ", "边标签: "],
        _ => &[],
    };
    debug_assert_eq!(prompts.len(), arity(name));

    let mut args: Vec<String> = Vec::with_capacity(prompts.len());
    for prompt in prompts {
        if name == "insert" && args.len() == 2 {
            if !graph.has_vertex(&args[0]) || !graph.has_vertex(&args[1]) {
                report(CommandResult::Error("插入失败: 顶点不存在".to_string()));
                return Ok(None);
            }
            if graph.is_edge_exists(&args[0], &args[1]) {
                report(CommandResult::Error("插入失败: 边已存在".to_string()));
                return Ok(None);
            }
        }

        let answer = match editor.readline(prompt) {
            Ok(answer) => answer.trim().to_string(),
            Err(ReadlineError::Interrupted) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if answer.is_empty() {
            return Ok(None);
        }
        args.push(answer);
    }

    Ok(Some(Command::from_args(name, args)?))
}

fn refresh_labels(editor: &mut LineEditor, graph: &Graph) {
    if let Some(helper) = editor.helper_mut() {
        helper.set_labels(graph.vertices().map(|v| v.label().to_string()));
    }
}
