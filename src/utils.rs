use crate::data::Label;
use crate::errors::ClassifierError;
use hashbrown::{HashMap, HashSet};

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

// Validation
pub fn validate_positive_float_parameter(value: f64, parameter: &str) -> Result<(), ClassifierError> {
    if value.is_nan() || value <= 0.0 || value.is_infinite() {
        Err(ClassifierError::InvalidParameter(
            parameter.to_string(),
            "finite value greater than 0".to_string(),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

pub fn validate_usize_parameter(value: usize, min: usize, parameter: &str) -> Result<(), ClassifierError> {
    if value < min {
        Err(ClassifierError::InvalidParameter(
            parameter.to_string(),
            format!("integer of at least {}", min),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Label frequencies, iterated in the order labels were first counted.
///
/// Tie breaking across the crate relies on that order, so the hash map
/// is only used as a position lookup and never iterated.
#[derive(Debug, Clone, Default)]
pub struct LabelCounts {
    positions: HashMap<Label, usize>,
    counts: Vec<(Label, usize)>,
    total: usize,
}

impl LabelCounts {
    pub fn new() -> Self {
        LabelCounts::default()
    }

    /// Count one more occurrence of `label`.
    pub fn add(&mut self, label: Label) {
        self.add_n(label, 1);
    }

    pub fn add_n(&mut self, label: Label, n: usize) {
        match self.positions.get(&label) {
            Some(&pos) => self.counts[pos].1 += n,
            None => {
                self.positions.insert(label, self.counts.len());
                self.counts.push((label, n));
            }
        }
        self.total += n;
    }

    pub fn get(&self, label: Label) -> usize {
        self.positions.get(&label).map_or(0, |&pos| self.counts[pos].1)
    }

    /// Total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct labels.
    pub fn n_labels(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Label, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Most frequent label, the earliest counted wins a tie.
    pub fn majority(&self) -> Option<Label> {
        let mut best: Option<(Label, usize)> = None;
        for &(label, count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((label, count)),
            }
        }
        best.map(|(label, _)| label)
    }

    /// Shannon entropy in bits, `0.0` for an empty or pure set.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        let mut entropy = 0.0;
        for &(_, count) in &self.counts {
            let p = count as f64 / total;
            entropy -= p * p.log2();
        }
        entropy
    }
}

impl FromIterator<Label> for LabelCounts {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut counts = LabelCounts::new();
        for label in iter {
            counts.add(label);
        }
        counts
    }
}

/// Distinct values in first-seen order, `0.0` and `-0.0` count as one value.
pub fn distinct_values<I: IntoIterator<Item = f64>>(values: I) -> Vec<f64> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        let v = if v == 0.0 { 0.0 } else { v };
        if seen.insert(v.to_bits()) {
            out.push(v);
        }
    }
    out
}

/// Round a value to a precision, handy when comparing floats.
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}
