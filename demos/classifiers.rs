//! Classifier Comparison
//! =====================
//! Trains every classifier of the crate on the same ten row dataset and
//! prints what each one predicts for `[1, 1, 1, 1]`.
//!
//! ```bash
//! cargo run --example classifiers
//! ```

use canopy::metric::evaluate;
use canopy::{
    Classifier, DecisionTreeClassifier, KnnClassifier, NaiveBayesClassifier, OneRuleClassifier, TextExample,
    TrainingExample,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let rows: [([f64; 4], i64); 10] = [
        ([0., 0., 0., 0.], 1),
        ([0., 0., 0., 1.], 0),
        ([0., 0., 1., 0.], 1),
        ([0., 0., 1., 1.], 1),
        ([0., 1., 0., 0.], 0),
        ([0., 1., 0., 1.], 0),
        ([0., 1., 1., 0.], 1),
        ([0., 1., 1., 1.], 1),
        ([1., 0., 0., 0.], 0),
        ([1., 0., 1., 0.], 0),
    ];
    let data: Vec<TrainingExample> = rows
        .iter()
        .map(|(features, label)| TrainingExample::new(features.to_vec(), *label))
        .collect();
    let text_data: Vec<TextExample> = data.iter().map(TextExample::from).collect();

    let query = [1., 1., 1., 1.];

    let dtc = DecisionTreeClassifier::new(&data)?;
    let knnc = KnnClassifier::new(&data)?.set_k(3);
    let mut nbc = NaiveBayesClassifier::new();
    nbc.train(&text_data);
    let mut orc = OneRuleClassifier::new();
    orc.train(&data)?;

    println!("{}", dtc.tree());

    let classifiers: [(&str, &dyn Classifier); 4] = [
        ("DecisionTreeClassifier", &dtc),
        ("NaiveBayesClassifier", &nbc),
        ("OneRuleClassifier", &orc),
        ("KNNClassifier", &knnc),
    ];
    for (name, clf) in classifiers {
        println!(
            "{}: {} (training accuracy {:.2})",
            name,
            clf.classify(&query)?,
            evaluate(clf, &data)?
        );
    }

    Ok(())
}
