use certtrack::QuestionBankEntry;

/// Builds a deterministic bank of `count` questions for module 1, each with
/// four distinct options and a known correct answer.
pub fn sample_bank(count: usize) -> Vec<QuestionBankEntry> {
    (0..count)
        .map(|number| QuestionBankEntry {
            module_id: 1,
            prompt: format!("Sample question {number}"),
            correct_answer: format!("Correct {number}"),
            options: vec![
                format!("Correct {number}"),
                format!("Wrong {number}-a"),
                format!("Wrong {number}-b"),
                format!("Wrong {number}-c"),
            ],
        })
        .collect()
}

/// Picks an option for the question at `index` that is not the correct one.
pub fn wrong_option(options: &[String], correct: &str) -> String {
    options
        .iter()
        .find(|option| option.as_str() != correct)
        .expect("every question has at least one wrong option")
        .clone()
}
