/// Command-line options for the terminal renderer
use anyhow::{bail, Context, Result};
use wf3d_core::{
    parse::{self, CubeSpec},
    ProjectionMode, Scene, SceneConfig,
};

pub const USAGE: &str = "\
Usage: wf3d-terminal [OPTIONS]

Options:
  --camera X,Y,Z        camera position (default 0,0,-50)
  --target X,Y,Z        look-at target (default 0,0,0)
  --fov DEGREES         field of view, between 0 and 180 exclusive (default 120)
  --step UNITS          camera movement per key press (default 1)
  --orthographic        start in orthographic projection
  --cube X,Y,Z,SIDE[,corner|centered]
                        add a cube; repeatable. X,Y,Z is the lowest corner unless
                        `centered` is given. Without any, the demo scene is shown
  -h, --help            print this help";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    pub config: SceneConfig,
    pub cubes: Vec<CubeSpec>,
    pub help: bool,
}

impl Options {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            let mut value = |name: &str| -> Result<String> {
                args.next()
                    .map(|v| v.as_ref().to_string())
                    .with_context(|| format!("{name} expects a value"))
            };

            match arg {
                "-h" | "--help" => options.help = true,
                "--camera" => {
                    let position = parse::parse_vector(&value(arg)?)?;
                    options.config.camera_position = position;
                }
                "--target" => {
                    let direction = parse::parse_vector(&value(arg)?)?;
                    options.config.camera_direction = direction;
                }
                "--fov" => {
                    let raw = value(arg)?;
                    options.config.fov = raw
                        .trim()
                        .parse()
                        .with_context(|| format!("invalid --fov value {raw:?}"))?;
                }
                "--step" => {
                    let raw = value(arg)?;
                    options.config.move_step = raw
                        .trim()
                        .parse()
                        .with_context(|| format!("invalid --step value {raw:?}"))?;
                }
                "--orthographic" => options.config.mode = ProjectionMode::Orthographic,
                "--cube" => options.cubes.push(parse::parse_cube(&value(arg)?)?),
                other => bail!("unknown argument {other:?}\n\n{USAGE}"),
            }
        }

        options.config.validate()?;
        Ok(options)
    }

    /// Scene with the requested cubes, or the demo cubes when none were given
    pub fn build_scene(&self) -> Result<Scene> {
        if self.cubes.is_empty() {
            return Ok(Scene::demo(self.config.clone())?);
        }

        let mut scene = Scene::new(self.config.clone())?;
        for cube in &self.cubes {
            scene
                .add_cube(cube.origin, cube.side, cube.placement)
                .with_context(|| format!("invalid cube {cube:?}"))?;
        }
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use wf3d_core::Placement;

    #[test]
    fn test_no_arguments_gives_demo_scene() {
        let options = Options::parse(Vec::<String>::new()).unwrap();
        assert_eq!(options.config, SceneConfig::default());
        let scene = options.build_scene().unwrap();
        assert_eq!(scene.shapes().len(), wf3d_core::scene::DEMO_CUBES.len());
    }

    #[test]
    fn test_full_argument_set() {
        let options = Options::parse([
            "--camera",
            "10,0,-80",
            "--target",
            "0,5,0",
            "--fov",
            "90",
            "--step",
            "5",
            "--orthographic",
            "--cube",
            "0,0,0,100",
            "--cube",
            "-10,-10,-10,20,corner",
        ])
        .unwrap();

        assert_eq!(options.config.camera_position, Point3::new(10.0, 0.0, -80.0));
        assert_eq!(options.config.camera_direction, Point3::new(0.0, 5.0, 0.0));
        assert_eq!(options.config.fov, 90.0);
        assert_eq!(options.config.move_step, 5.0);
        assert_eq!(options.config.mode, ProjectionMode::Orthographic);
        assert_eq!(options.cubes.len(), 2);
        assert_eq!(options.cubes[0].placement, Placement::Corner);
        assert_eq!(options.cubes[1].placement, Placement::Corner);

        let scene = options.build_scene().unwrap();
        assert_eq!(scene.shapes().len(), 2);
        assert_eq!(scene.shapes()[1].index(), 1);
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(Options::parse(["--fov", "180"]).is_err());
        assert!(Options::parse(["--fov"]).is_err());
        assert!(Options::parse(["--camera", "0,0"]).is_err());
        assert!(Options::parse(["--camera", "0,0,0"]).is_err());
        assert!(Options::parse(["--bogus"]).is_err());
    }

    #[test]
    fn test_bad_cube_fails_scene_build() {
        let options = Options::parse(["--cube", "0,0,0,-5"]).unwrap();
        assert!(options.build_scene().is_err());
    }

    #[test]
    fn test_help_flag() {
        assert!(Options::parse(["--help"]).unwrap().help);
    }
}
