mod app;
mod export;
mod view;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use prepdeck_config::Config;
use prepdeck_engine::{ContentRepository, io, render::HtmlOptions};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    View {
        content_path: Option<PathBuf>,
    },
    Export {
        out_dir: PathBuf,
        content_path: Option<PathBuf>,
    },
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [] => Some(Command::View { content_path: None }),
        [flag, out_dir, rest @ ..] if flag == "--export" && rest.len() <= 1 => {
            Some(Command::Export {
                out_dir: PathBuf::from(out_dir),
                content_path: rest.first().map(PathBuf::from),
            })
        }
        [path] if !path.starts_with("--") => Some(Command::View {
            content_path: Some(PathBuf::from(path)),
        }),
        _ => None,
    }
}

fn usage(program: &str) {
    eprintln!("Usage: {program} [content-path]");
    eprintln!("       {program} --export <out-dir> [content-path]");
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("prepdeck-cli");
    let Some(command) = parse_args(args.get(1..).unwrap_or_default()) else {
        usage(program);
        process::exit(1);
    };

    let (content_arg, out_dir) = match command {
        Command::View { content_path } => (content_path, None),
        Command::Export {
            out_dir,
            content_path,
        } => (content_path, Some(out_dir)),
    };

    // Content path from CLI args, falling back to the config file
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if content_arg.is_some() => {
            log::warn!("Ignoring unreadable config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            usage(program);
            process::exit(1);
        }
    };
    let from_config = content_arg.is_none();
    let Some(content_path) = content_arg.or_else(|| config.as_ref().map(|c| c.content_path.clone()))
    else {
        eprintln!("Error: No content path provided and no config file found");
        usage(program);
        eprintln!("Or create a config file at {}", config_path.display());
        process::exit(1);
    };

    if let Err(e) = io::validate_content_dir(&content_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Content path '{}'{} is invalid: {e}",
            content_path.display(),
            source
        );
        process::exit(1);
    }

    let repo = ContentRepository::open(&content_path)?;

    if let Some(out_dir) = out_dir {
        let options = HtmlOptions {
            list_indent_px: config
                .as_ref()
                .map(|c| c.render.list_indent_px)
                .unwrap_or(HtmlOptions::default().list_indent_px),
            ..HtmlOptions::default()
        };
        let written = export::export_site(&repo, &out_dir, &options)?;
        println!("Exported {written} topics to {}", out_dir.display());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(repo);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_topic(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_topic(),
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_category(),
                KeyCode::Right => app.expand_selected_category(),
                KeyCode::Left => app.collapse_selected_category(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Topic outline panel
    let topic_items: Vec<ListItem> = app
        .tree_items
        .iter()
        .map(|item| {
            let indent = "  ".repeat(item.depth);
            let icon = match (item.node.is_category(), item.node.is_expanded) {
                (true, true) => "📂 ",
                (true, false) => "📁 ",
                (false, _) => "📄 ",
            };
            ListItem::new(Line::from(format!("{indent}{icon}{}", item.node.name)))
        })
        .collect();

    let topics_list = List::new(topic_items)
        .block(Block::default().borders(Borders::ALL).title("Topics"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(topics_list, chunks[0], &mut app.topic_list_state);

    // Detail panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a topic to view its content")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Detail"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("Enter/Space: Toggle | →: Expand | ←: Collapse"),
    ]));
    f.render_widget(help, rows[1]);
}
