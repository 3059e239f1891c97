/// WF3D Terminal Demo - Wireframe cubes
///
/// Controls:
///   - Arrow Keys: Move the camera along x / y
///   - W/S: Move the camera along z
///   - [ / ]: Narrow / widen the field of view
///   - P: Toggle perspective / orthographic
///   - R: Reset the camera
///   - Q/ESC: Quit
use anyhow::Result;
use wf3d_terminal::{cli::USAGE, Options, TerminalApp};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Options::parse(std::env::args().skip(1))?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let scene = options.build_scene()?;
    log::info!(
        "starting with {} shapes, camera at {:?}",
        scene.shapes().len(),
        scene.camera().position()
    );

    let mut app = TerminalApp::new(scene)?;
    app.run()?;

    Ok(())
}
