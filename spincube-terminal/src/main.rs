/// Spincube Terminal Demo - Rotating Wireframe Cube
///
/// Renders the unit cube as a tumbling wireframe in the terminal.
/// Controls:
///   - Space: Pause
///   - T: Toggle motion trails (skip per-frame clear)
///   - +/-: Adjust rotation speed
///   - Q/ESC: Quit

use std::io;
use spincube_core::Mesh;
use spincube_terminal::TerminalApp;

fn main() -> io::Result<()> {
    env_logger::init();

    let cube = Mesh::unit_cube();

    let mut app = TerminalApp::new(cube)?;
    app.run()?;

    Ok(())
}
