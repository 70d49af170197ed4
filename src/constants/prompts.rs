pub const TUTOR_SYSTEM_PROMPT: &str =
    "You are a helpful AI tutor that creates questions and answers.";

/// Instruction template for exam question generation. Placeholders:
/// `{count}` for the requested number of questions, `{source}` for the
/// truncated study material. The source text is embedded verbatim.
pub const EXAM_QUESTION_TEMPLATE: &str = "Generate exactly {count} multiple-choice questions based on the study material below.

### Output Format

Format every question exactly like this:

1. <question text>
A) <first option>
B) <second option>
C) <third option>
D) <fourth option>
**Correct Answer: <letter>) <option text>**

### Rules

- Number the questions sequentially starting at 1.
- Every question has exactly four options labelled A through D.
- The bolded correct-answer line repeats both the letter and the option text.
- Do not add commentary, explanations, or prose outside this format.

### STUDY MATERIAL

{source}";
