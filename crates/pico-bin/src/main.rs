//! pico entrypoint.
use anyhow::Result;
use clap::Parser;
use core_config::Config;
use core_events::{Event, InputEvent, KeyEvent};
use core_model::{EditorModel, Layout};
use core_state::{Document, EditorState};
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalGuard};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

const LOG_FILE: &str = "pico.log";

/// Per-user state directory for the log (`$XDG_STATE_HOME/pico`), falling back
/// to the cache directory on platforms without one.
fn default_log_dir() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("pico"))
}

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "pico", version, about = "A small modal text editor")]
struct Args {
    /// File to open. Without one the editor starts on an unnamed buffer.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `pico.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

struct EditorRuntime<'a> {
    model: EditorModel,
    config: Config,
    _terminal_guard: TerminalGuard<'a>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn run<'a>(&'a mut self, args: &Args) -> Result<EditorRuntime<'a>> {
        // Load before the log sink opens and before touching the terminal, so
        // a bad path fails in cooked mode and the file is read untouched.
        let document = match args.path.as_deref() {
            Some(path) => core_actions::load_document(path)?,
            None => Document::new(),
        };
        if let Some(dir) = default_log_dir() {
            self.configure_logging(&dir)?;
        }
        Self::install_panic_hook();
        info!(target: "runtime", "startup");

        let mut config = core_config::load_from(args.config.clone())?;

        self.backend.set_title("pico")?;
        let size = self.backend.size()?;
        let guard = self.backend.enter_guard()?;
        let model = build_model(document, &mut config, size);

        info!(
            target: "runtime.startup",
            path = args.path.as_deref().map(Path::display).map(tracing::field::display),
            config_override = args.config.is_some(),
            lines = model.state().document.line_count(),
            scroll_padding = model.scroll_padding(),
            "bootstrap_complete"
        );

        Ok(EditorRuntime {
            model,
            config,
            _terminal_guard: guard,
        })
    }

    /// Append to `pico.log` inside `log_dir`. A directory that cannot be
    /// created or written leaves the editor running without a file log.
    fn configure_logging(&mut self, log_dir: &Path) -> Result<()> {
        let Ok(file_appender) = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE)
            .build(log_dir)
        else {
            return Ok(());
        };
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                core_terminal::restore();
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Assemble the model for a terminal of `(width, height)` and apply the
/// configuration to it.
fn build_model(document: Document, config: &mut Config, (width, height): (u16, u16)) -> EditorModel {
    let mut state = EditorState::new(document);
    state.configure(config.quit_times(), config.message_timeout());
    state.set_status(format!("pico v{}", env!("CARGO_PKG_VERSION")));

    let layout = Layout::new(width, height, config.line_numbers());
    let padding = config.apply_context(text_rows_u16(&layout));
    let mut model = EditorModel::new(state, layout);
    model.set_scroll_padding(usize::from(padding));
    model
}

fn text_rows_u16(layout: &Layout) -> u16 {
    u16::try_from(layout.text_rows()).unwrap_or(u16::MAX)
}

impl EditorRuntime<'_> {
    fn run(&mut self) -> Result<()> {
        let span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter = span.enter();

        let mut needs_render = true;
        loop {
            if self.model.state_mut().tick_ephemeral() {
                needs_render = true;
            }
            if needs_render {
                self.model.scroll();
                core_render::render(&self.model)?;
            }
            needs_render = match core_input::read_event()? {
                Event::Input(InputEvent::Key(key)) => {
                    let result = self.handle_key(&key);
                    if result.quit {
                        break;
                    }
                    result.dirty
                }
                Event::Input(InputEvent::Resize(w, h)) => {
                    self.handle_resize(w, h);
                    true
                }
            };
        }
        info!(target: "runtime.shutdown", "event_loop_exit");
        Ok(())
    }

    fn handle_key(&mut self, key: &KeyEvent) -> core_actions::DispatchResult {
        core_actions::handle_key(&mut self.model, key)
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        let layout = self.model.layout().resized(width, height);
        let rows = text_rows_u16(&layout);
        self.model.set_layout(layout);
        if let Some(padding) = self.config.recompute_after_resize(rows) {
            debug!(target: "runtime", padding, "scroll_padding_recomputed");
            self.model.set_scroll_padding(usize::from(padding));
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    let mut runtime = startup.run(&args)?;
    runtime.run()
}
