//! Machine-readable renderer: one JSON document per line

use std::io::Write;

use serde::Serialize;

use super::PresentationSink;
use crate::sim::{Frame, RoundReport};

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    Frame(&'a Frame),
    RoundEnded {
        report: &'a RoundReport,
        headline: String,
    },
}

/// Writes frames and the final report as JSON lines.
///
/// Write errors are logged once and further output is dropped; the game
/// keeps running.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, record: &Record<'_>) {
        if self.failed {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, record)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = result {
            log::warn!("frame output failed, disabling: {}", e);
            self.failed = true;
        }
    }
}

impl<W: Write> PresentationSink for JsonLinesRenderer<W> {
    fn present(&mut self, frame: &Frame) {
        self.write(&Record::Frame(frame));
    }

    fn round_ended(&mut self, report: &RoundReport) {
        self.write(&Record::RoundEnded {
            report,
            headline: report.headline(),
        });
        if let Err(e) = self.out.flush() {
            log::warn!("frame output flush failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Arena, LossCause, RoundState};

    #[test]
    fn test_writes_one_line_per_record() {
        let state = RoundState::new(0, Arena::default());
        let mut renderer = JsonLinesRenderer::new(Vec::new());
        renderer.present(&Frame::capture(&state));
        renderer.round_ended(&RoundReport {
            score: 5,
            strikes: 3,
            cause: LossCause::Strikes,
        });

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let frame: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(frame["type"], "frame");
        assert_eq!(frame["score"], 0);

        let end: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(end["type"], "round_ended");
        assert_eq!(end["report"]["cause"], "Strikes");
        assert_eq!(end["headline"], "You reached 3 strikes! GAME OVER");
    }
}
