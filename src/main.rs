use std::error::Error;
use std::io;
use std::time::{Duration, Instant};
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use human_panic::setup_panic;
use log::{debug, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use dnaflip::{
    clipboard::{Clipboard, TerminalClipboard},
    logging, ui::render_ui, App, Operation,
};

const TICK_RATE: Duration = Duration::from_millis(250);

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic!();

    logging::set_log_level();
    if let Err(e) = logging::init_logging() {
        eprintln!("Logging disabled: {e}");
    }
    logging::log_system_info();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let mut clipboard = TerminalClipboard::stdout();
    let result = run(&mut terminal, &mut app, &mut clipboard);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logging::log_critical_error(&e.to_string(), Some("event loop"));
    }
    logging::log_shutdown();

    result
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    clipboard: &mut dyn Clipboard,
) -> Result<(), Box<dyn Error>> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| render_ui(f, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if !handle_key(app, clipboard, key) {
                    debug!("Quit requested");
                    return Ok(());
                }
            }
            Event::Paste(text) => app.on_paste(&text),
            Event::Resize(width, height) => debug!("Terminal resized to {width}x{height}"),
            _ => {}
        }
    }
}

/// Returns false when the user asked to quit.
fn handle_key(app: &mut App, clipboard: &mut dyn Clipboard, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return false,
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return false,
        KeyCode::F(1) => app.process(Operation::Reverse),
        KeyCode::F(2) => app.process(Operation::Complement),
        KeyCode::F(3) => app.process(Operation::ReverseComplement),
        KeyCode::Char('r') if ctrl => app.process(Operation::Reverse),
        KeyCode::Char('o') if ctrl => app.process(Operation::Complement),
        KeyCode::Char('b') if ctrl => app.process(Operation::ReverseComplement),
        KeyCode::Char('y') if ctrl => app.copy_input(clipboard),
        KeyCode::Char('k') if ctrl => app.copy_output(clipboard),
        KeyCode::Char('l') if ctrl => app.clear(),
        KeyCode::Char(c) if !ctrl => app.on_key(c),
        KeyCode::Enter => app.on_enter(),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Delete => app.on_delete(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Up => app.cursor_up(),
        KeyCode::Down => app.cursor_down(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        other => warn!("Unhandled key {other:?}"),
    }
    true
}
