use std::fmt;
use std::path::PathBuf;

use layerstack_core::InspectionPanel;
use layerstack_ui3d::VisualizationSession;

use crate::export;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    Help,
    List,
    Model { key: String },
    Inspect { id: u32 },
    Pick { x: f32, y: f32 },
    Resize { width: u32, height: u32 },
    Clear,
    Export { dir: PathBuf },
    Quit,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub lines: Vec<String>,
}

pub fn execute_command<P: InspectionPanel>(
    session: &mut VisualizationSession<P>,
    cmd: ViewerCommand,
) -> CommandOutput {
    let mut out = CommandOutput::default();
    match cmd {
        ViewerCommand::Help => out.lines.extend(help_lines()),
        ViewerCommand::List => {
            for (key, model) in session.catalog().iter() {
                let marker = if session.active_model() == Some(key) {
                    "*"
                } else {
                    " "
                };
                out.lines
                    .push(format!("{marker} {key}: {} ({} layers)", model.name, model.len()));
            }
        }
        ViewerCommand::Model { key } => {
            session.load_model(&key);
            match session.active_model() {
                Some(active) => out.lines.push(format!(
                    "Showing {active} with {} layers",
                    session.visuals().len()
                )),
                None => out.lines.push(format!("Unknown model: {key}. Scene cleared")),
            }
        }
        ViewerCommand::Inspect { id } => {
            if session.inspect(id).is_none() {
                out.lines.push(format!("No layer {id} in the current scene"));
            }
        }
        ViewerCommand::Pick { x, y } => {
            if session.pick_screen((x, y)).is_none() {
                out.lines.push(format!("Nothing at {x:.0} {y:.0}"));
            }
        }
        ViewerCommand::Resize { width, height } => {
            session.resize(width, height);
            let (w, h) = session.viewport();
            out.lines.push(format!("Viewport {w}x{h}"));
        }
        ViewerCommand::Clear => {
            session.clear();
            out.lines.push("Scene cleared".to_string());
        }
        ViewerCommand::Export { dir } => match export::export_scene(session, &dir) {
            Ok(written) => out.lines.push(format!(
                "Exported {} labels to {}",
                written.len(),
                dir.display()
            )),
            Err(err) => out.lines.push(format!("Error: {err:#}")),
        },
        ViewerCommand::Quit => {}
    }
    out
}

/// Parse one command line. Blank lines and `#` comments yield `None`.
pub fn parse_command(input: &str) -> Result<Option<ViewerCommand>, CommandError> {
    let input = input.trim();
    if input.is_empty() || input.starts_with('#') {
        return Ok(None);
    }

    let mut parts = input.split_whitespace();
    let cmd = parts
        .next()
        .ok_or_else(|| CommandError::new("Missing command"))?
        .to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    let command = match cmd.as_str() {
        "help" | "?" => ViewerCommand::Help,
        "list" | "models" => ViewerCommand::List,
        "model" | "load" => {
            if args.len() != 1 {
                return Err(CommandError::new("Usage: model <key>"));
            }
            ViewerCommand::Model {
                key: args[0].to_string(),
            }
        }
        "inspect" => {
            if args.len() != 1 {
                return Err(CommandError::new("Usage: inspect <layer-id>"));
            }
            let id = args[0]
                .parse::<u32>()
                .map_err(|_| CommandError::new(format!("Invalid layer id: {}", args[0])))?;
            ViewerCommand::Inspect { id }
        }
        "pick" => {
            if args.len() != 2 {
                return Err(CommandError::new("Usage: pick <x> <y>"));
            }
            ViewerCommand::Pick {
                x: parse_pixel(args[0])?,
                y: parse_pixel(args[1])?,
            }
        }
        "resize" => {
            if args.len() != 2 {
                return Err(CommandError::new("Usage: resize <width> <height>"));
            }
            ViewerCommand::Resize {
                width: parse_extent(args[0])?,
                height: parse_extent(args[1])?,
            }
        }
        "clear" => ViewerCommand::Clear,
        "export" => {
            if args.len() != 1 {
                return Err(CommandError::new("Usage: export <dir>"));
            }
            ViewerCommand::Export {
                dir: PathBuf::from(args[0]),
            }
        }
        "quit" | "exit" | "q" => ViewerCommand::Quit,
        _ => {
            return Err(CommandError::new(format!(
                "Unknown command: {cmd}. Try help"
            )))
        }
    };
    Ok(Some(command))
}

fn parse_pixel(s: &str) -> Result<f32, CommandError> {
    s.parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::new(format!("Invalid pixel coordinate: {s}")))
}

fn parse_extent(s: &str) -> Result<u32, CommandError> {
    s.parse::<u32>()
        .map_err(|_| CommandError::new(format!("Invalid size: {s}")))
}

fn help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  help".to_string(),
        "  list                  catalog keys; * marks the model on screen".to_string(),
        "  model <key>           replace the scene with another model".to_string(),
        "  inspect <layer-id>    show a layer in the panel".to_string(),
        "  pick <x> <y>          pick the layer under a viewport pixel".to_string(),
        "  resize <w> <h>".to_string(),
        "  clear".to_string(),
        "  export <dir>          write label PNGs and scene.json".to_string(),
        "  quit".to_string(),
    ]
}
