pub mod analysis {
    pub mod analysisresult;
    pub mod analyzer;
    pub mod characteristicdiameter;
    pub mod finecontent;
    pub mod sortingclass;
}

pub mod configuration;

pub mod criteria {
    pub mod criteriaevaluation;
    pub mod criteriaspec;
    pub mod criteriaspecmanager;
    pub mod interval;
}

pub mod distribution {
    pub mod distributionpoint;
    pub mod distributioncurve;
    pub mod gradationtable;
}

pub mod envelope {
    pub mod envelopespec;
    pub mod envelopegenerator;
    pub mod envelopespecmanager;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod logisticcurve;
    }
    pub mod interpolation;
}

pub mod objectwithuuid;

pub mod sample {
    pub mod sample;
    pub mod samplecomparison;
}

pub mod screening {
    pub mod masssplit;
    pub mod screencut;
}
