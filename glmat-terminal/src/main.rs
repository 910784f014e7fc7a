/// glmat Terminal Inspector - Frame Matrices
///
/// Prints the projection and model-view matrices a WebGL frame would upload.
/// Flags:
///   --fov DEGREES        vertical field of view (default 45)
///   --size WIDTHxHEIGHT  drawing surface size (default 640x480)
///   --near N / --far F   clip planes (default 0.1 / 100)
///   --offset X,Y,Z       model translation (default 0,0,-6)

use std::env;
use std::io::{self, stdout, Write};
use glmat_terminal::{init_logging, parse_args, FrameReport, USAGE};

fn main() -> io::Result<()> {
    init_logging();

    let options = parse_args(env::args().skip(1))?;
    if options.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let report = FrameReport::new(options.config, options.viewport).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("Failed to build frame matrices: {}", e))
    })?;

    let mut stdout = stdout();
    report.draw(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}
