//! Interactive fin explorer.
//!
//! Solves a single fin, prints its performance, and opens a plot window
//! showing the temperature profile.
//!
//! # Usage
//!
//! ```text
//! cargo run --example fin_explorer
//! cargo run --example fin_explorer -- k=150 h=60 fin_type=pin
//! cargo run --example fin_explorer -- l=0.3 tip_condition=convective
//! ```
//!
//! Numeric controls (`k`, `h`, `p`, `a_c`, `l`, `t_b`, `t_inf`) snap to their
//! slider range and step. Unset controls keep their defaults.

use std::error::Error;

use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use twine_fins::models::thermal::fin::{
    self, FinInputs, FinParameters, X_AXIS_LABEL, Y_AXIS_LABEL, controls, plot_title,
};
use twine_observers::{PlotObserver, ShowConfig};

fn main() -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let inputs = parse_args(std::env::args().skip(1)).unwrap_or_else(|msg| {
        eprintln!("{msg}");
        eprintln!("Usage: fin_explorer [name=value ...]");
        std::process::exit(1);
    });

    // Invalid inputs stop here, before anything is reported or plotted.
    let params = FinParameters::from_inputs(&inputs)?;
    let result = fin::solve(&params)?;

    println!("{}", result.report());

    let trace = format!("{Y_AXIS_LABEL} vs {X_AXIS_LABEL}");
    let mut obs = PlotObserver::<1>::new([trace.as_str()]);
    for [x, t] in result.profile_points() {
        obs.record(x, [Some(t)]);
    }

    info!("opening plot window");
    obs.show(
        ShowConfig::new()
            .title(plot_title(params.fin_type, params.tip_condition))
            .legend(),
    )?;

    Ok(())
}

/// Builds fin inputs from `name=value` arguments.
fn parse_args(args: impl Iterator<Item = String>) -> Result<FinInputs, String> {
    let mut inputs = FinInputs::default();

    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("Expected name=value, got `{arg}`"))?;

        match name {
            "fin_type" => inputs.fin_type = value.to_owned(),
            "tip_condition" => inputs.tip_condition = value.to_owned(),
            _ => {
                let range =
                    controls::by_name(name).ok_or_else(|| format!("Unknown control: {name}"))?;
                let value = value
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid number for {name}: `{value}`"))?;
                let snapped = range.snap(value);
                let slot = match name {
                    "k" => &mut inputs.k,
                    "h" => &mut inputs.h,
                    "p" => &mut inputs.p,
                    "a_c" => &mut inputs.a_c,
                    "l" => &mut inputs.l,
                    "t_b" => &mut inputs.t_b,
                    _ => &mut inputs.t_inf,
                };
                *slot = snapped;
            }
        }
    }

    Ok(inputs)
}
