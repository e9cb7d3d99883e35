//! Admission score and high-school average commands

use super::{describe, emit};
use gpa_calc::config::Config;
use gpa_calc::core::input::{parse_number, parse_weights, require_all};
use gpa_calc::core::report::Report;
use gpa_calc::core::schemes::Scheme;
use gpa_calc::core::GradeError;
use gpa_calc::{debug, info};
use std::path::Path;

/// Raw inputs for one weighted calculation
pub struct WeightedInput<'a> {
    /// Scores in scheme order, as typed
    pub scores: [Option<&'a str>; 3],
    /// Comma-separated weights, if given
    pub weights: Option<&'a str>,
}

/// Run a weighted-average scheme.
///
/// All three scores must be present before anything is calculated; custom
/// weights replace the scheme defaults.
pub fn run(
    scheme: Scheme,
    input: &WeightedInput,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let (scores, weights) = parse_input(scheme, input).map_err(|e| describe(&e))?;
    debug!("{scheme}: scores {scores:?}, weights {weights:?}");

    let result = scheme
        .evaluate(&scores, weights.as_deref(), config.weight_policy())
        .map_err(|e| describe(&e))?;

    info!("{scheme} = {:.4} ({})", result.total, result.rating);
    let report = Report::scheme(scheme, &result, config.display.decimals);
    emit(&report, config.report_format(), output)
}

/// Print the high-school letter-band table.
pub fn run_bands(output: Option<&Path>, config: &Config) -> Result<(), String> {
    emit(&Report::score_bands(), config.report_format(), output)
}

fn parse_input(
    scheme: Scheme,
    input: &WeightedInput,
) -> Result<(Vec<f64>, Option<Vec<f64>>), GradeError> {
    let fields: Vec<(&str, Option<&str>)> =
        scheme.labels().into_iter().zip(input.scores).collect();
    require_all(&fields)?;

    let scores = fields
        .iter()
        .map(|(label, raw)| parse_number(label, *raw))
        .collect::<Result<Vec<_>, _>>()?;
    let weights = input.weights.map(parse_weights).transpose()?;
    Ok((scores, weights))
}
