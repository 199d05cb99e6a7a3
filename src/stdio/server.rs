use super::protocol::{HostCall, RefreshRequest};
use crate::config::MarkerStyle;
use crate::error::{BoxError, GutterError, Result};
use crate::gutter::{MarkerKind, MarkerPosition};
use crate::host::{
    Document, GutterCommand, MarkerSurface, MemoryWorkspace, Refresh, StaticDiff,
};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Rendering surface that serializes each call onto a line-oriented writer.
pub struct JsonSurface<W: Write> {
    out: W,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn send(&mut self, call: &HostCall) -> std::result::Result<(), BoxError> {
        serde_json::to_writer(&mut self.out, call)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkerSurface for JsonSurface<W> {
    fn clear_markers(&mut self, kinds: &[MarkerKind]) -> std::result::Result<(), BoxError> {
        self.send(&HostCall::Clear {
            categories: kinds.to_vec(),
        })
    }

    fn draw_markers(
        &mut self,
        kind: MarkerKind,
        positions: &[MarkerPosition],
        style: &MarkerStyle,
    ) -> std::result::Result<(), BoxError> {
        self.send(&HostCall::Draw {
            category: kind,
            lines: positions.iter().map(|p| p.line()).collect(),
            style: style.clone(),
        })
    }
}

/// Open a newline-delimited request file for [`StdioServer::serve`].
pub fn open_requests(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| GutterError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Drives `GutterCommand` from newline-delimited JSON requests.
pub struct StdioServer {
    command: GutterCommand,
}

impl StdioServer {
    pub fn new(command: GutterCommand) -> Self {
        Self { command }
    }

    /// Decode one request line and run a refresh against `surface`.
    pub fn handle_line<S: MarkerSurface + ?Sized>(
        &self,
        line: &str,
        surface: &mut S,
    ) -> Result<Refresh> {
        let request: RefreshRequest = serde_json::from_str(line)?;
        let workspace = MemoryWorkspace {
            active: request.document.map(Document::new),
        };
        let mut diff = StaticDiff::new(request.lines);
        self.command.run(&workspace, &mut diff, surface)
    }

    /// Serve requests until `input` is exhausted. Returns how many refreshes
    /// drew markers.
    ///
    /// A malformed request is logged and skipped. Any other failure, including
    /// a closed `output`, ends the loop with that error.
    pub fn serve<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<usize> {
        let mut surface = JsonSurface::new(output);
        let mut drawn = 0;

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_line(&line, &mut surface) {
                Ok(Refresh::Drawn(_)) => drawn += 1,
                Ok(Refresh::Skipped) => {}
                Err(e @ GutterError::Request(_)) => {
                    tracing::warn!(request = index + 1, error = %e, "skipping malformed request")
                }
                Err(e) => {
                    tracing::error!(request = index + 1, error = %e, "refresh failed, stopping");
                    return Err(e);
                }
            }
        }

        Ok(drawn)
    }
}
