// Prompt templates for the explainer module. Each operation has two fully
// independent parallel templates (English / Arabic) selected by `Language`,
// plus its own fixed sampling parameters. Caller-supplied text is
// interpolated literally with no sanitization.

use crate::llm_client::GenParams;
use crate::models::Language;

pub const EXPLANATION_PARAMS: GenParams = GenParams {
    max_tokens: 2048,
    temperature: 0.5,
};

pub const FEEDBACK_PARAMS: GenParams = GenParams {
    max_tokens: 1024,
    temperature: 0.5,
};

pub const QUESTION_PARAMS: GenParams = GenParams {
    max_tokens: 1536,
    temperature: 0.7,
};

/// Explanation template. Replace `{standard_title}` and `{scenario}`.
const EXPLANATION_TEMPLATE_EN: &str = r#"You are an expert in Islamic Finance standards, particularly AAOIFI standards.
Explain the accounting treatment for the given scenario in simple terms that a non-specialist can understand.
Use step-by-step explanations and include the journal entries where appropriate.

Standard: {standard_title}

Scenario: {scenario}

Please explain:
1. What this standard is about
2. How to account for this transaction step-by-step
3. The proper journal entries
4. Why this method complies with Islamic finance principles
"#;

const EXPLANATION_TEMPLATE_AR: &str = r#"أنت خبير في معايير التمويل الإسلامي، خاصة معايير هيئة المحاسبة والمراجعة للمؤسسات المالية الإسلامية.
قم بشرح المعالجة المحاسبية للسيناريو المعطى بمصطلحات بسيطة يمكن لغير المتخصص فهمها.
استخدم شرحًا خطوة بخطوة وقم بتضمين قيود اليومية حيثما كان ذلك مناسبًا.

المعيار: {standard_title}

السيناريو: {scenario}

يرجى شرح:
1. ما هو هذا المعيار
2. كيفية المحاسبة عن هذه المعاملة خطوة بخطوة
3. قيود اليومية المناسبة
4. لماذا تتوافق هذه الطريقة مع مبادئ التمويل الإسلامي
"#;

/// Feedback template. Replace `{scenario}`, `{user_solution}`, `{expert_solution}`.
const FEEDBACK_TEMPLATE_EN: &str = r#"You are an expert in Islamic Finance standards. Compare the user's solution to an expert solution and provide feedback.

Scenario: {scenario}

User's solution:
{user_solution}

Expert solution:
{expert_solution}

Provide feedback on the user's solution. Highlight what they got correct and what needs improvement.
Rate their understanding on a scale of 1-10.
"#;

const FEEDBACK_TEMPLATE_AR: &str = r#"أنت خبير في معايير التمويل الإسلامي. قارن حل المستخدم بحل الخبير وقدم تعليقات.

السيناريو: {scenario}

حل المستخدم:
{user_solution}

حل الخبير:
{expert_solution}

قدم تعليقات على حل المستخدم. سلط الضوء على ما أصابوه بشكل صحيح وما يحتاج إلى تحسين.
قيّم فهمهم على مقياس من 1 إلى 10.
"#;

/// Free-form question template. Replace `{question}`.
const QUESTION_TEMPLATE_EN: &str = r#"You are an expert in Islamic Finance standards, particularly AAOIFI standards.
The user has asked the following question about Islamic Finance:

{question}

Provide a clear, detailed answer using your knowledge of Islamic finance principles and standards.
Reference specific AAOIFI standards when relevant. Make your explanation easy for non-specialists to understand.
"#;

const QUESTION_TEMPLATE_AR: &str = r#"أنت خبير في معايير التمويل الإسلامي، خاصة معايير هيئة المحاسبة والمراجعة للمؤسسات المالية الإسلامية.
طرح المستخدم السؤال التالي حول التمويل الإسلامي:

{question}

قدم إجابة واضحة ومفصلة باستخدام معرفتك بمبادئ ومعايير التمويل الإسلامي.
أشر إلى معايير هيئة المحاسبة والمراجعة للمؤسسات المالية الإسلامية المحددة عندما يكون ذلك ذا صلة. اجعل شرحك سهلاً لغير المتخصصين لفهمه.
"#;

/// Prompt asking the model to explain the accounting treatment of `scenario`
/// under the named standard: coverage, step-by-step treatment, journal
/// entries, compliance rationale.
pub fn explanation_prompt(standard_title: &str, scenario: &str, language: Language) -> String {
    let template = match language {
        Language::English => EXPLANATION_TEMPLATE_EN,
        Language::Arabic => EXPLANATION_TEMPLATE_AR,
    };
    template
        .replace("{standard_title}", standard_title)
        .replace("{scenario}", scenario)
}

/// Prompt asking the model to compare the user's solution to the expert
/// solution and rate understanding on a 1-10 scale.
pub fn feedback_prompt(
    scenario: &str,
    user_solution: &str,
    expert_solution: &str,
    language: Language,
) -> String {
    let template = match language {
        Language::English => FEEDBACK_TEMPLATE_EN,
        Language::Arabic => FEEDBACK_TEMPLATE_AR,
    };
    template
        .replace("{scenario}", scenario)
        .replace("{user_solution}", user_solution)
        .replace("{expert_solution}", expert_solution)
}

/// Prompt asking the model to answer a free-form Islamic Finance question,
/// referencing standards by name where relevant.
pub fn question_prompt(question: &str, language: Language) -> String {
    let template = match language {
        Language::English => QUESTION_TEMPLATE_EN,
        Language::Arabic => QUESTION_TEMPLATE_AR,
    };
    template.replace("{question}", question)
}
