//! Forward-function commands: `cdf`, `pdf`, `erf` and `erfc`

use gauss_core::distribution::{cdf, erf, erfc, pdf};
use gauss_core::types::SignedFixed;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::emit;
use crate::Result;

/// Which forward function to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Cdf,
    Pdf,
    Erf,
    Erfc,
}

impl Function {
    fn name(self) -> &'static str {
        match self {
            Function::Cdf => "cdf",
            Function::Pdf => "pdf",
            Function::Erf => "erf",
            Function::Erfc => "erfc",
        }
    }
}

#[derive(Debug, Serialize)]
struct Evaluation {
    function: Function,
    x: SignedFixed,
    value: SignedFixed,
}

/// Evaluate `function` at `x`
pub fn evaluate(function: Function, x: SignedFixed) -> Result<SignedFixed> {
    let value = match function {
        Function::Cdf => SignedFixed::positive(cdf(x)?),
        Function::Pdf => SignedFixed::positive(pdf(x)?),
        Function::Erf => erf(x)?,
        Function::Erfc => SignedFixed::positive(erfc(x)?),
    };
    Ok(value)
}

/// Run a forward-function command
pub fn run(function: Function, x: SignedFixed, config: &CliConfig) -> Result<()> {
    info!("Evaluating {}({})", function.name(), x);
    let value = evaluate(function, x)?;
    let evaluation = Evaluation { function, x, value };
    emit(config.format, &evaluation, || {
        format!("{}({}) = {}", function.name(), x, value)
    })
}
