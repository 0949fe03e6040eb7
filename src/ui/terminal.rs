use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Lets exactly one caller put the terminal back.
#[derive(Debug, Default)]
struct RestoreOnce {
    done: AtomicBool,
}

impl RestoreOnce {
    /// True for the first caller only.
    fn take(&self) -> bool {
        !self.done.swap(true, Ordering::SeqCst)
    }
}

/// Puts the terminal back the way it was when dropped.
pub struct TerminalGuard {
    restore: Arc<RestoreOnce>,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.restore.take() {
            restore();
        }
    }
}

/// Enter raw mode on the alternate screen.
///
/// The returned guard restores the terminal on drop. A panic on the calling
/// thread restores it too, before the default hook prints the panic. Panics in
/// spawned request tasks run on other threads and leave the popup alone; they
/// only surface through their join handles.
pub fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;

    let restore = Arc::new(RestoreOnce::default());
    install_panic_hook(Arc::clone(&restore), thread::current().id());

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, TerminalGuard { restore }))
}

fn install_panic_hook(restore_once: Arc<RestoreOnce>, ui_thread: ThreadId) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if should_restore_on_panic(ui_thread, thread::current().id()) && restore_once.take() {
            restore();
        }
        default_hook(info);
    }));
}

fn should_restore_on_panic(ui_thread: ThreadId, panicking: ThreadId) -> bool {
    ui_thread == panicking
}

fn restore() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}
