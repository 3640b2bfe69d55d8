use layerstack_core::{InspectionPanel, LayerDescriptor, PanelText};
use std::io::{self, Write};
use tracing::warn;

/// Inspection panel that prints its four lines to a writer.
pub struct ConsolePanel<W: Write> {
    out: W,
}

impl ConsolePanel<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePanel<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> InspectionPanel for ConsolePanel<W> {
    fn display(&mut self, layer: Option<&LayerDescriptor>) {
        let text = PanelText::for_layer(layer);
        let result = text
            .lines()
            .iter()
            .try_for_each(|line| writeln!(self.out, "  {line}"))
            .and_then(|_| self.out.flush());
        if let Err(err) = result {
            warn!("Failed to write inspection panel: {err}");
        }
    }
}
