/// Parsers for command-line scene values
///
/// Accepted forms:
///   vector: `X,Y,Z`
///   cube:   `X,Y,Z,SIDE` optionally followed by `,corner` (default) or `,centered`
use nalgebra::Point3;
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0},
    combinator::{all_consuming, opt, value},
    number::complete::double,
    sequence::{delimited, preceded},
    IResult,
};

use crate::error::{Result, Wf3dError};
use crate::shapes::Placement;

/// A cube requested on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeSpec {
    pub origin: Point3<f64>,
    pub side: f64,
    pub placement: Placement,
}

pub fn parse_vector(input: &str) -> Result<Point3<f64>> {
    match all_consuming(delimited(multispace0, vector3, multispace0))(input) {
        Ok((_, point)) => Ok(point),
        Err(_) => Err(Wf3dError::Parse {
            what: "vector",
            input: input.to_string(),
        }),
    }
}

pub fn parse_cube(input: &str) -> Result<CubeSpec> {
    match all_consuming(delimited(multispace0, cube_spec, multispace0))(input) {
        Ok((_, spec)) => Ok(spec),
        Err(_) => Err(Wf3dError::Parse {
            what: "cube",
            input: input.to_string(),
        }),
    }
}

fn separator(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

fn vector3(input: &str) -> IResult<&str, Point3<f64>> {
    let (input, x) = double(input)?;
    let (input, y) = preceded(separator, double)(input)?;
    let (input, z) = preceded(separator, double)(input)?;
    Ok((input, Point3::new(x, y, z)))
}

fn placement(input: &str) -> IResult<&str, Placement> {
    alt((
        value(Placement::Corner, tag_no_case("corner")),
        value(Placement::Centered, tag_no_case("centered")),
    ))(input)
}

fn cube_spec(input: &str) -> IResult<&str, CubeSpec> {
    let (input, origin) = vector3(input)?;
    let (input, side) = preceded(separator, double)(input)?;
    let (input, placement) = opt(preceded(separator, placement))(input)?;
    Ok((
        input,
        CubeSpec {
            origin,
            side,
            placement: placement.unwrap_or_default(),
        },
    ))
}
