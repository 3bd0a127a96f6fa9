use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use sieveanalysis::configuration::Configuration;
use sieveanalysis::envelope::envelopegenerator::generate_envelope;
use sieveanalysis::manager::manager::IManager;
use sieveanalysis::sample::sample::Sample;
use sieveanalysis::sample::samplecomparison::compare_samples;

const USAGE: &str = "usage: sieveanalysis <config.json> <samples.json> <criteria> [envelope]";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (config_path, samples_path, criteria_name) = match args.as_slice() {
        [config, samples, criteria, ..] => (config, samples, criteria),
        _ => return Err(USAGE.into())
    };

    let config = Configuration::new();
    config.from_reader(config_path)?;
    let criteria = config.criteria_spec_manager().get(criteria_name)?;

    let samples: Vec<Sample> = serde_json::from_reader(BufReader::new(File::open(samples_path)?))?;
    let comparison = compare_samples(&config.analyzer(), &samples, &criteria);

    let mut report = json!({
        "criteria": criteria_name,
        "comparison": comparison
    });

    if let Some(envelope_name) = args.get(3) {
        let band = generate_envelope(config.envelope_spec_manager().get(envelope_name)?)?;
        let inside: Vec<&str> = samples
            .iter()
            .filter(|sample| band.contains(sample.curve()))
            .map(|sample| sample.name())
            .collect();
        report["envelope"] = json!({
            "name": envelope_name,
            "band": band,
            "samples_inside": inside
        });
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
