/// Terminal inspector for frame matrices
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use glmat_core::{FrameConfig, FrameMatrices, Viewport};
use std::io::{self, Write};
use std::sync::Once;

pub mod args;
pub mod printer;

pub use args::{parse_args, Options, USAGE};
pub use printer::MatrixPrinter;

static LOGGING: Once = Once::new();

/// Set up `env_logger`, honoring `RUST_LOG` and defaulting to warnings.
///
/// Idempotent; later calls are ignored.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let mut builder = env_logger::Builder::new();
        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }
        builder.init();

        log::debug!("logging initialized");
    });
}

/// Both frame matrices plus the settings they were built from
pub struct FrameReport {
    pub config: FrameConfig,
    pub viewport: Viewport,
    pub frame: FrameMatrices,
    printer: MatrixPrinter,
}

impl FrameReport {
    pub fn new(config: FrameConfig, viewport: Viewport) -> glmat_core::Result<Self> {
        let frame = config.matrices(viewport)?;
        Ok(Self {
            config,
            viewport,
            frame,
            printer: MatrixPrinter::default(),
        })
    }

    /// Clip-space depth of the near and far plane centers
    pub fn depth_range(&self) -> Option<(f32, f32)> {
        let projection = &self.frame.projection;
        let near = projection.transform_point([0.0, 0.0, -self.config.near])?;
        let far = projection.transform_point([0.0, 0.0, -self.config.far])?;
        Some((near[2], far[2]))
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.queue(Print(format!(
            "viewport {}x{} | fov {:.1} deg | near {} | far {}\n\n",
            self.viewport.width,
            self.viewport.height,
            self.config.field_of_view.to_degrees(),
            self.config.near,
            self.config.far,
        )))?;

        self.printer
            .draw(writer, "projection (uProjectionMatrix)", &self.frame.projection)?;
        writer.queue(Print('\n'))?;
        self.printer
            .draw(writer, "model-view (uModelViewMatrix)", &self.frame.model_view)?;

        if let Some((near, far)) = self.depth_range() {
            writer.queue(Print('\n'))?;
            writer.queue(SetForegroundColor(Color::Grey))?;
            writer.queue(Print(format!(
                "clip depth: near plane -> {:.4}, far plane -> {:.4}\n",
                near, far
            )))?;
            writer.queue(ResetColor)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        assert!(LOGGING.is_completed());
    }

    #[test]
    fn test_depth_range_spans_clip_cube() {
        let report = FrameReport::new(FrameConfig::default(), Viewport::new(800.0, 600.0)).unwrap();
        let (near, far) = report.depth_range().unwrap();
        assert!((near + 1.0).abs() < 1e-4);
        assert!((far - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_report_rejects_degenerate_config() {
        let config = FrameConfig {
            near: 5.0,
            far: 5.0,
            ..FrameConfig::default()
        };
        assert!(FrameReport::new(config, Viewport::new(800.0, 600.0)).is_err());
    }

    #[test]
    fn test_draw_report() {
        let report = FrameReport::new(FrameConfig::default(), Viewport::new(800.0, 600.0)).unwrap();
        let mut out = Vec::new();
        report.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("viewport 800x600"));
        assert!(text.contains("uProjectionMatrix"));
        assert!(text.contains("-6.0000"));
        assert!(text.contains("clip depth"));
    }
}
