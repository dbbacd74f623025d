use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, error};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use math_toolkit::{
    arithmetic, geometry, logarithm, random, rounding, stats, trig, Result,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "mathtk", version, about = "Evaluate a math-toolkit function")]
struct Args {
    /// Seed for the random commands; omit for a fresh sequence each run
    #[arg(long)]
    seed: Option<u64>,

    /// Round numeric output to this many decimal places
    #[arg(long)]
    decimals: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    Add(Pair),
    Subtract(Pair),
    Multiply(Pair),
    Divide(Pair),
    /// base^exponent
    Power(Pair),
    Sqrt(Single),
    Abs(Single),
    RectangleArea(Pair),
    CircleArea(Single),
    CubeVolume(Single),
    Mean(Many),
    Median(Many),
    Mode(Many),
    DegToRad(Single),
    RadToDeg(Single),
    /// Sine of an angle in degrees
    Sin(Single),
    /// Cosine of an angle in degrees
    Cos(Single),
    /// Tangent of an angle in degrees
    Tan(Single),
    Sinh(Single),
    Cosh(Single),
    Tanh(Single),
    Round(Single),
    Ceil(Single),
    Floor(Single),
    Truncate {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true, default_value_t = 0)]
        decimals: i32,
    },
    Sign(Single),
    Clamp {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },
    Max(Many),
    Min(Many),
    IsInteger(Single),
    IsFinite(Single),
    ToFixed {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(default_value_t = rounding::DEFAULT_DECIMALS)]
        decimals: u32,
    },
    Log(Single),
    /// log of x in the given base
    LogBase(Pair),
    /// Uniform float in [min, max)
    Random(Pair),
    /// Uniform integer in [ceil(min), floor(max)]
    RandomInt(Pair),
}

#[derive(clap::Args, Debug, Clone)]
struct Single {
    #[arg(allow_negative_numbers = true)]
    x: f64,
}

#[derive(clap::Args, Debug, Clone)]
struct Pair {
    #[arg(allow_negative_numbers = true)]
    a: f64,
    #[arg(allow_negative_numbers = true)]
    b: f64,
}

#[derive(clap::Args, Debug, Clone)]
struct Many {
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
enum Output {
    Number(f64),
    Integer(i64),
    Numbers(Vec<f64>),
    Flag(bool),
}

impl Output {
    fn render(&self, decimals: Option<u32>) -> String {
        let fmt = |x: f64| match decimals {
            Some(d) => rounding::to_fixed(x, d).to_string(),
            None => x.to_string(),
        };
        match self {
            Output::Number(x) => fmt(*x),
            Output::Integer(n) => n.to_string(),
            Output::Numbers(xs) => xs.iter().map(|&x| fmt(x)).collect::<Vec<_>>().join(" "),
            Output::Flag(b) => b.to_string(),
        }
    }
}

fn run(args: &Args) -> Result<Output> {
    use Command::*;
    use Output::*;

    let out = match &args.command {
        Add(p) => Number(arithmetic::add(p.a, p.b)),
        Subtract(p) => Number(arithmetic::subtract(p.a, p.b)),
        Multiply(p) => Number(arithmetic::multiply(p.a, p.b)),
        Divide(p) => Number(arithmetic::divide(p.a, p.b)?),
        Power(p) => Number(arithmetic::power(p.a, p.b)),
        Sqrt(s) => Number(arithmetic::square_root(s.x)?),
        Abs(s) => Number(arithmetic::absolute(s.x)),
        RectangleArea(p) => Number(geometry::rectangle_area(p.a, p.b)),
        CircleArea(s) => Number(geometry::circle_area(s.x)),
        CubeVolume(s) => Number(geometry::cube_volume(s.x)),
        Mean(m) => Number(stats::mean(&m.values)),
        Median(m) => Number(stats::median(&m.values)),
        Mode(m) => Numbers(stats::mode(&m.values)),
        DegToRad(s) => Number(trig::degrees_to_radians(s.x)),
        RadToDeg(s) => Number(trig::radians_to_degrees(s.x)),
        Sin(s) => Number(trig::sin(s.x)),
        Cos(s) => Number(trig::cos(s.x)),
        Tan(s) => Number(trig::tan(s.x)),
        Sinh(s) => Number(trig::sinh(s.x)),
        Cosh(s) => Number(trig::cosh(s.x)),
        Tanh(s) => Number(trig::tanh(s.x)),
        Round(s) => Number(rounding::round(s.x)),
        Ceil(s) => Number(rounding::ceil(s.x)),
        Floor(s) => Number(rounding::floor(s.x)),
        Truncate { x, decimals } => Number(rounding::truncate(*x, *decimals)),
        Sign(s) => Number(rounding::sign(s.x)),
        Clamp { x, min, max } => Number(rounding::clamp(*x, *min, *max)),
        Max(m) => Number(rounding::maximum(&m.values)),
        Min(m) => Number(rounding::minimum(&m.values)),
        IsInteger(s) => Flag(rounding::is_integer(s.x)),
        IsFinite(s) => Flag(rounding::is_finite(s.x)),
        ToFixed { x, decimals } => Number(rounding::to_fixed(*x, *decimals)),
        Log(s) => Number(logarithm::log(s.x)?),
        LogBase(p) => Number(logarithm::log_base(p.a, p.b)?),
        Random(p) => Number(random::random_between(p.a, p.b, &mut rng(args.seed))),
        RandomInt(p) => Integer(random::random_int_between(p.a, p.b, &mut rng(args.seed))?),
    };
    Ok(out)
}

fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => random::create_rng(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    debug!("evaluating {:?}", args.command);

    match run(&args) {
        Ok(out) => {
            println!("{}", out.render(args.decimals));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
