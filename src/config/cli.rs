use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "img/americascup.jpg";
pub const DEFAULT_OUTPUT: &str = "test.png";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Parse `[input_path] [output_path]` (program name already stripped).
///
/// More than two arguments is an error carrying the usage text.
pub fn parse_args<I>(program: &str, args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let mut parsed = CliArgs::default();
    match args.as_slice() {
        [] => {}
        [input] => parsed.input = PathBuf::from(input),
        [input, output] => {
            parsed.input = PathBuf::from(input);
            parsed.output = PathBuf::from(output);
        }
        _ => return Err(format!("Too many arguments\n{}", usage(program))),
    }
    Ok(parsed)
}

pub fn usage(program: &str) -> String {
    format!("Usage:\n\t{program} [input_path] [output_path]")
}
