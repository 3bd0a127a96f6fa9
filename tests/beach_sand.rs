use sieveanalysis::analysis::analyzer::SieveAnalyzer;
use sieveanalysis::analysis::finecontent::FineContentSource;
use sieveanalysis::criteria::criteriaevaluation::evaluate;
use sieveanalysis::criteria::criteriaspec::CriteriaSpec;
use sieveanalysis::criteria::interval::Interval;
use sieveanalysis::distribution::distributioncurve::DistributionCurve;
use sieveanalysis::sample::sample::Sample;
use sieveanalysis::sample::samplecomparison::compare_samples;
use sieveanalysis::screening::masssplit::underflow;
use sieveanalysis::screening::screencut::{
    ScreenCut,
    apply_cuts
};

const SIZES: [f64; 20] = [
    28.0, 20.0, 19.0, 14.0, 10.0, 6.3, 5.0, 4.75, 3.35, 2.36,
    2.0, 1.18, 0.6, 0.425, 0.3, 0.212, 0.15, 0.075, 0.063, 0.0
];
const PERCENTS: [f64; 20] = [
    100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 99.0, 90.0,
    87.0, 59.0, 38.0, 21.0, 14.0, 9.0, 5.0, 0.0, 0.0, 0.0
];

fn beach_sand() -> DistributionCurve {
    DistributionCurve::from_columns(&SIZES, &PERCENTS).unwrap()
}

fn nourishment() -> CriteriaSpec {
    CriteriaSpec::new(
        Interval::closed(0.3, 0.5),
        Interval::closed(1.5, 2.5),
        Interval::below(2.0),
        Interval::below(5.0)
    )
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!((actual - expected).abs() < tolerance, "expected {expected}, got {actual}");
}

#[test]
fn original_sample_is_too_coarse_and_too_graded() {
    let result = SieveAnalyzer::default().analyze(beach_sand().into(), "original").unwrap();

    assert_close(result.d10(), 0.2296, 1e-9);
    assert_close(result.d50(), 0.6 + 0.58 * 12.0 / 21.0, 1e-9);
    assert_close(result.d60(), 1.18 + 0.82 / 28.0, 1e-9);
    assert_close(result.cu(), 5.2669, 1e-3);
    assert_close(result.so(), 1.8805, 1e-3);
    assert_eq!(result.fine_content().percent(), 0.0);
    assert_eq!(result.fine_content().source(), FineContentSource::Measured);
    assert_eq!(result.curve().diameter_at_percent(100.0), 28.0);

    let evaluation = evaluate(&result, &nourishment());
    assert!(!evaluation.d50_in_range);
    assert!(!evaluation.cu_in_range);
    assert!(evaluation.so_in_range);
    assert!(evaluation.fines_in_range);
    assert_eq!(evaluation.satisfied_count(), 2);
}

#[test]
fn one_millimetre_underflow_tops_out_at_the_cutoff() {
    let under = underflow(&beach_sand(), 1.0).unwrap();

    assert_eq!(under.max_size(), 1.0);
    assert_eq!(under.percent_at_size(0.6), Some(100.0));
    assert_close(under.percent_at_size(0.3).unwrap(), 14.0 / 38.0 * 100.0, 1e-9);
    assert_eq!(under.diameter_at_percent(100.0), 1.0);

    let again = underflow(&under, 1.0).unwrap();
    assert_eq!(again.diameter_at_percent(100.0), 1.0);
}

#[test]
fn screening_circuit_brings_d50_into_range() {
    let product = apply_cuts(&beach_sand(), &[ScreenCut::Underflow(1.0), ScreenCut::Overflow(0.075)]).unwrap();
    assert_eq!(product.min_size(), 0.075);
    assert_eq!(product.min_percent(), 0.0);
    assert_eq!(product.max_size(), 1.0);
    assert_eq!(product.diameter_at_percent(100.0), 1.0);

    let result = SieveAnalyzer::default().analyze(product.into(), "1mm underflow, 0.075mm overflow").unwrap();
    assert_close(result.d10(), 0.132, 1e-9);
    assert_close(result.d50(), 0.3 + 0.125 * 5.0 / 7.0, 1e-9);
    assert_close(result.cu(), 3.3601, 1e-3);
    assert_close(result.so(), 1.5082, 1e-3);
    assert_eq!(result.fine_content().source(), FineContentSource::OutOfRange);

    let evaluation = evaluate(&result, &nourishment());
    assert!(evaluation.d50_in_range);
    assert!(!evaluation.cu_in_range);
    assert!(evaluation.so_in_range);
    assert!(evaluation.fines_in_range);
    assert!(evaluation.fines_approximate);
    assert_eq!(evaluation.satisfied_count(), 3);
}

#[test]
fn comparison_summary_over_the_screening_stages() {
    let original = beach_sand();
    let under = underflow(&original, 1.0).unwrap();
    let product = apply_cuts(&under, &[ScreenCut::Overflow(0.075)]).unwrap();
    let samples = vec![
        Sample::new("original".to_owned(), original),
        Sample::new("underflow".to_owned(), under),
        Sample::new("product".to_owned(), product)
    ];

    let comparison = compare_samples(&SieveAnalyzer::default(), &samples, &nourishment());
    assert!(comparison.failures().is_empty());
    let assessments = comparison.assessments();
    let met: Vec<usize> = assessments.iter().map(|a| a.criteria_met()).collect();
    assert_eq!(met, vec![2, 3, 3]);
    assert!(!assessments[1].evaluation().fines_approximate);

    let summary = comparison.summary();
    assert_eq!(summary.sample_count, 3);
    assert_eq!(summary.fully_compliant, 0);
    assert_eq!(summary.best_sample, Some(*assessments[1].sample_id()));
    assert_eq!(summary.best_criteria_met, 3);
}
