use super::types::FitResult;

/// Significance level used by the written evaluation.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;
pub const STRONG_FIT: f64 = 0.7;
pub const MODERATE_FIT: f64 = 0.3;

const NORMALIZATION_NOTE: &str = "By normalizing the data using Min-Max scaling, the range of the \
    data is transformed to a fixed range between 0 and 1. This ensures that no variable dominates \
    the model simply because it has larger values than others. This normalization allows for a \
    fair comparison between the two variables, Consumption and GDP.";

const CAUSATION_NOTE: &str = "However, it is important to note that correlation does not imply \
    causation and there may be other factors that are contributing to the relationship observed \
    in the data.";

/// Sentences describing the fit, generated from its actual statistics.
pub fn evaluation_sentences(fit: &FitResult) -> Vec<String> {
    let mut sentences = vec![NORMALIZATION_NOTE.to_owned()];

    let r2 = fit.r_squared;
    let pct = (r2 * 100.0).max(0.0);
    sentences.push(format!(
        "The results show that the model has an R-squared value of {r2:.3}, which means that \
         {pct:.1}% of the variation in GDP can be explained by the variation in consumption."
    ));
    if r2 > STRONG_FIT {
        sentences.push("This is a strong predictive model.".to_owned());
    } else if r2 > MODERATE_FIT {
        sentences.push("This is a moderate predictive model.".to_owned());
    } else {
        sentences.push(
            "This is a weak predictive model; other factors are likely at play.".to_owned(),
        );
    }

    let slope = fit.slope.coef;
    let direction = if slope >= 0.0 { "increase" } else { "decrease" };
    sentences.push(format!(
        "The coefficient of the {} variable is {slope:.4}, which means that for every unit \
         increase in consumption, there is an expected {direction} of {:.4} units in GDP.",
        fit.slope.name,
        slope.abs()
    ));

    let p = fit.slope.p_value;
    if p.is_nan() {
        sentences.push(
            "The p-value of the consumption coefficient cannot be computed for this few \
             observations, so its significance cannot be assessed."
                .to_owned(),
        );
    } else if fit.slope_is_significant(SIGNIFICANCE_LEVEL) {
        let relationship = if slope >= 0.0 { "positive" } else { "negative" };
        sentences.push(format!(
            "Additionally, the p-value of the coefficient of the consumption variable is less \
             than {SIGNIFICANCE_LEVEL}, indicating that it is statistically significant. \
             Therefore, we can conclude that there is a significant {relationship} relationship \
             between consumption and GDP for EU countries. As consumption increases, GDP is \
             expected to {direction} as well."
        ));
    } else {
        sentences.push(format!(
            "The p-value of the coefficient of the consumption variable is {p:.3}, which is not \
             below {SIGNIFICANCE_LEVEL}, so the relationship between consumption and GDP is not \
             statistically significant at that level."
        ));
    }

    sentences.push(CAUSATION_NOTE.to_owned());
    sentences
}

/// The evaluation as a single paragraph.
pub fn evaluation_text(fit: &FitResult) -> String {
    evaluation_sentences(fit).join(" ")
}
