/// Command-line flag parsing for the matrix inspector
use nom::{
    character::complete::{char, one_of, space0},
    combinator::all_consuming,
    number::complete::float,
    sequence::{delimited, preceded, tuple},
    IResult,
};
use std::io;

use glmat_core::{FrameConfig, Viewport};

pub const USAGE: &str = "Usage: glmat-terminal [--fov DEGREES] [--size WIDTHxHEIGHT] \
[--near N] [--far F] [--offset X,Y,Z]";

/// Everything the inspector needs to build a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub config: FrameConfig,
    pub viewport: Viewport,
    pub show_help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: FrameConfig::default(),
            viewport: Viewport::new(640.0, 480.0),
            show_help: false,
        }
    }
}

/// Parse flags (without the program name) into inspector options
pub fn parse_args<I>(args: I) -> io::Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        if flag == "-h" || flag == "--help" {
            options.show_help = true;
            continue;
        }

        let value = args
            .next()
            .ok_or_else(|| invalid(format!("Missing value for {}", flag)))?;

        match flag.as_str() {
            "--fov" => {
                let degrees = parse_value(&value, number)?;
                options.config.field_of_view = degrees.to_radians();
            }
            "--size" => {
                let (width, height) = parse_value(&value, size)?;
                options.viewport = Viewport::new(width, height);
            }
            "--near" => options.config.near = parse_value(&value, number)?,
            "--far" => options.config.far = parse_value(&value, number)?,
            "--offset" => options.config.model_offset = parse_value(&value, triple)?,
            _ => return Err(invalid(format!("Unknown flag: {}", flag))),
        }
    }

    log::debug!("parsed options: {:?}", options);
    Ok(options)
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, format!("{}\n{}", message, USAGE))
}

fn parse_value<T>(input: &str, parser: fn(&str) -> IResult<&str, T>) -> io::Result<T> {
    match all_consuming(parser)(input) {
        Ok((_, value)) => Ok(value),
        Err(e) => Err(invalid(format!("Malformed value {:?}: {:?}", input, e))),
    }
}

fn number(input: &str) -> IResult<&str, f32> {
    delimited(space0, float, space0)(input)
}

/// `640x480`
fn size(input: &str) -> IResult<&str, (f32, f32)> {
    tuple((number, preceded(one_of("xX"), number)))(input)
}

/// `-0.0,0.0,-6.0`
fn triple(input: &str) -> IResult<&str, [f32; 3]> {
    let (input, (x, y, z)) = tuple((
        number,
        preceded(char(','), number),
        preceded(char(','), number),
    ))(input)?;
    Ok((input, [x, y, z]))
}
