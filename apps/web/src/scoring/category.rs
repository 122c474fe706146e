use serde::Serialize;

/// The closed set of quiz categories. Answers naming anything outside this
/// set are discarded during scoring rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Analytical,
    Data,
    Ai,
    SoftwareDev,
    Hardware,
    Security,
    Creative,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Analytical,
        Category::Data,
        Category::Ai,
        Category::SoftwareDev,
        Category::Hardware,
        Category::Security,
        Category::Creative,
    ];

    /// Canonical name as it appears in quiz answers, the weight table, and
    /// the result-page query string.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Analytical => "Analytical",
            Category::Data => "Data",
            Category::Ai => "AI",
            Category::SoftwareDev => "SoftwareDev",
            Category::Hardware => "Hardware",
            Category::Security => "Security",
            Category::Creative => "Creative",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        match name {
            "Analytical" => Some(Category::Analytical),
            "Data" => Some(Category::Data),
            "AI" => Some(Category::Ai),
            "SoftwareDev" => Some(Category::SoftwareDev),
            "Hardware" => Some(Category::Hardware),
            "Security" => Some(Category::Security),
            "Creative" => Some(Category::Creative),
            _ => None,
        }
    }

    /// Normalization divisor used when converting a raw accumulator into a
    /// percentage. These are calibrated to the maximum attainable raw score
    /// per category in the shipped quiz.
    pub fn base_score(self) -> f64 {
        match self {
            Category::Analytical => 820.0,
            Category::Data => 1000.0,
            Category::Ai => 820.0,
            Category::SoftwareDev => 200.0,
            Category::Hardware => 260.0,
            Category::Security => 200.0,
            Category::Creative => 700.0,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-category score vector, one slot per [`Category`] in declaration
/// order. Holds raw accumulators during scoring and percentages afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryScores {
    values: [f64; 7],
}

impl CategoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> f64 {
        self.values[category.index()]
    }

    pub fn set(&mut self, category: Category, value: f64) {
        self.values[category.index()] = value;
    }

    pub fn add(&mut self, category: Category, delta: f64) {
        self.values[category.index()] += delta;
    }

    /// Iterates in the fixed category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}
