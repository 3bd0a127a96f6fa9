use serde::{
    Serialize,
    Serializer
};
use tracing::{
    info,
    warn
};
use uuid::Uuid;

use crate::analysis::analysisresult::AnalysisResult;
use crate::analysis::analyzer::{
    AnalysisError,
    SieveAnalyzer
};
use crate::criteria::criteriaevaluation::{
    CriteriaEvaluation,
    evaluate
};
use crate::criteria::criteriaspec::CriteriaSpec;
use crate::objectwithuuid::ObjectWithUUID;
use crate::sample::sample::Sample;

/// One sample's statistics and its standing against a criteria set.
#[derive(Debug, Clone, Serialize)]
pub struct SampleAssessment {
    sample_id: Uuid,
    name: String,
    result: AnalysisResult,
    evaluation: CriteriaEvaluation
}

impl SampleAssessment {
    pub fn sample_id(&self) -> &Uuid {
        &self.sample_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    pub fn evaluation(&self) -> &CriteriaEvaluation {
        &self.evaluation
    }

    pub fn criteria_met(&self) -> usize {
        self.evaluation.satisfied_count()
    }
}

fn serialize_error<S: Serializer>(error: &AnalysisError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// A sample whose curve could not be analysed.
#[derive(Debug, Clone, Serialize)]
pub struct SampleFailure {
    sample_id: Uuid,
    name: String,
    #[serde(serialize_with = "serialize_error")]
    error: AnalysisError
}

impl SampleFailure {
    pub fn sample_id(&self) -> &Uuid {
        &self.sample_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn error(&self) -> &AnalysisError {
        &self.error
    }
}

/// Outcome of a batch comparison. Each sample is analysed on its own, so a
/// failing curve is reported without touching the others.
#[derive(Debug, Clone, Serialize)]
pub struct SampleComparison {
    assessments: Vec<SampleAssessment>,
    failures: Vec<SampleFailure>,
    summary: ComparisonSummary
}

impl SampleComparison {
    /// Successful assessments, in input order.
    pub fn assessments(&self) -> &[SampleAssessment] {
        &self.assessments
    }

    pub fn failures(&self) -> &[SampleFailure] {
        &self.failures
    }

    pub fn summary(&self) -> &ComparisonSummary {
        &self.summary
    }
}

pub fn assess_sample(analyzer: &SieveAnalyzer,
                     sample: &Sample,
                     spec: &CriteriaSpec) -> Result<SampleAssessment, AnalysisError> {
    let result = analyzer.analyze(sample.curve().clone(), sample.name())?;
    let evaluation = evaluate(&result, spec);
    Ok(SampleAssessment {
        sample_id: *sample.uuid(),
        name: sample.name().to_owned(),
        result,
        evaluation
    })
}

/// Analyses every sample and checks it against `spec`.
pub fn compare_samples(analyzer: &SieveAnalyzer,
                       samples: &[Sample],
                       spec: &CriteriaSpec) -> SampleComparison {
    let mut assessments = Vec::with_capacity(samples.len());
    let mut failures = Vec::new();
    for sample in samples {
        match assess_sample(analyzer, sample, spec) {
            Ok(assessment) => assessments.push(assessment),
            Err(error) => {
                warn!(sample = sample.name(), %error, "sample skipped");
                failures.push(SampleFailure {
                    sample_id: *sample.uuid(),
                    name: sample.name().to_owned(),
                    error
                });
            }
        }
    }
    let mut summary = ComparisonSummary::from_assessments(&assessments);
    summary.failed = failures.len();
    SampleComparison { assessments, failures, summary }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    /// Samples that were analysed.
    pub sample_count: usize,
    /// Samples whose curve could not be analysed.
    pub failed: usize,
    pub fully_compliant: usize,
    /// Sample meeting the most criteria; the earliest one wins a tie.
    pub best_sample: Option<Uuid>,
    pub best_criteria_met: usize
}

impl ComparisonSummary {
    pub fn from_assessments(assessments: &[SampleAssessment]) -> ComparisonSummary {
        let best = assessments
            .iter()
            .rev()
            .max_by_key(|assessment| assessment.criteria_met());
        let summary = ComparisonSummary {
            sample_count: assessments.len(),
            failed: 0,
            fully_compliant: assessments.iter().filter(|a| a.evaluation.all_satisfied()).count(),
            best_sample: best.map(|a| a.sample_id),
            best_criteria_met: best.map_or(0, |a| a.criteria_met())
        };
        info!(
            samples = summary.sample_count,
            fully_compliant = summary.fully_compliant,
            best_criteria_met = summary.best_criteria_met,
            "sample comparison"
        );
        summary
    }
}
