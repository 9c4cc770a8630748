use std::fmt::Write;

/// Renders `weights` as the closed-form polynomial, e.g. `y = 1.00000 + 2.00000 * x^1`.
pub fn equation(weights: &[f64]) -> String {
    let mut equation = String::from("y = ");

    for (i, w) in weights.iter().enumerate() {
        if i == 0 {
            let _ = write!(equation, "{w:.5}");
        } else {
            let sign = if *w >= 0.0 { '+' } else { '-' };
            let _ = write!(equation, " {sign} {:.5} * x^{i}", w.abs());
        }
    }

    equation
}

/// Renders `weights` as a two-row table: a header with the weight names and a row
/// with their values.
pub fn weight_table(weights: &[f64]) -> String {
    let mut header = String::from("|");
    let mut values = String::from("| ");

    for (j, w) in weights.iter().enumerate() {
        let _ = write!(header, " w{:<12}|", j);
        let _ = write!(values, "{:>12} | ", format!("{w:.5}"));
    }

    format!("{header}\n{values}")
}

/// Renders `weights` as a comma separated list with five decimals.
pub fn render_weights(weights: &[f64]) -> String {
    weights
        .iter()
        .map(|w| format!("{w:.5}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The final rendering of a trained model.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub equation: String,
    pub table: String,
}

impl Summary {
    pub fn new(weights: &[f64]) -> Self {
        Self {
            equation: equation(weights),
            table: weight_table(weights),
        }
    }
}
