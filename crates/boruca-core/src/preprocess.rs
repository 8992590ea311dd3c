pub trait Preprocessor {
    // Case folding only: no trimming, no punctuation or diacritic stripping
    fn process(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
