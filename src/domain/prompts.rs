//! Prompt templates and generation parameters for AI tasks
//!
//! Provides the fixed instruction template and generation profile for each
//! task type, and builds the final generation request.

use crate::domain::models::{GenerationRequest, TaskType};

/// Sampling and length parameters selected per task.
///
/// Extraction must be near-deterministic and short; summaries are long-form;
/// query answers sit in between. The cap ordering extract < query < summarize
/// and the lower extraction temperature are relied upon by callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationProfile {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Default prompt templates for each task type
pub struct PromptTemplates;

impl PromptTemplates {
    /// Instruction template for structured field extraction
    pub fn extract() -> &'static str {
        r#"You are a meeting data extraction expert. Analyse the provided content and extract meeting details using British English conventions.

Look for:
- Meeting title in filename or document header
- Date in YYYY-MM-DD format from filename or content
- Time in HH:MM format from timestamps or content
- Location mentions (conference rooms, cities, virtual platforms)
- Client name or organisation mentioned
- Project name or identifier
- Attendee names mentioned in conversation

Return ONLY a JSON object with this exact structure:
{
  "title": "extracted meeting title or null",
  "date": "YYYY-MM-DD format or null",
  "time": "HH:MM format or null",
  "location": "meeting location or null",
  "client": "client name or organisation or null",
  "project": "project name or identifier or null",
  "attendees": "comma-separated attendees or null"
}

For the title, prefer meaningful topics from filename over generic phrases.
For transcripts, extract the main business purpose discussed.

Return ONLY valid JSON, no explanations or markdown."#
    }

    /// Instruction template for narrative meeting summaries
    pub fn summarize() -> &'static str {
        r#"You are a professional meeting minutes assistant. Create a comprehensive summary in clear, readable format using British English spelling and terminology throughout (organisation, analyse, prioritise, realise, behaviour, whilst).

Structure your response as follows:

# Meeting Summary: [Title]

## Meeting Overview
Brief overview of the meeting's purpose and main topics discussed.

## Key Decisions Made
- List the main decisions made during the meeting
- Include specific agreements or approvals

## Action Items
| Assignee | Task Description | Due Date | Priority | Status |
|----------|------------------|----------|----------|--------|
| [Name] | [Specific task] | [Date or TBD] | [High/Medium/Low] | [Not Started] |

## Discussion Points & Strategic Insights
**Key Topics Discussed:**
- Main discussion themes and important points raised

**Technical/Operational Notes:**
- Technical details and operational considerations

## Financial & Resource Implications
- Budget considerations mentioned
- Resource allocation discussions

## Next Steps & Follow-up Actions
- Planned next steps
- Follow-up meetings scheduled

## Outstanding Issues
- Unresolved items requiring attention
- Pending decisions or approvals needed

Focus on extracting real information from the content provided, not generic templates."#
    }

    /// Instruction template for free-form questions over meeting data
    pub fn query() -> &'static str {
        r#"You are a meeting analysis assistant using British English. Answer the user's question about the provided meeting data using British spelling and terminology (organisation, analyse, prioritise, etc.). Be specific and reference actual meeting content when possible. If the information isn't available in the meetings provided, say so clearly.

Format your response in a clear, professional manner with bullet points or structured text as appropriate."#
    }

    /// Template for a specific task type
    pub fn for_task(task: TaskType) -> &'static str {
        match task {
            TaskType::Extract => Self::extract(),
            TaskType::Summarize => Self::summarize(),
            TaskType::Query => Self::query(),
        }
    }

    /// Generation parameters for a specific task type
    pub fn profile(task: TaskType) -> GenerationProfile {
        match task {
            TaskType::Extract => GenerationProfile {
                temperature: 0.1,
                max_output_tokens: 400,
            },
            TaskType::Summarize => GenerationProfile {
                temperature: 0.7,
                max_output_tokens: 2500,
            },
            TaskType::Query => GenerationProfile {
                temperature: 0.7,
                max_output_tokens: 800,
            },
        }
    }

    /// Build the complete generation request for a task over the given content.
    ///
    /// Content is appended verbatim; no truncation or sanitisation.
    pub fn build(task: TaskType, content: &str) -> GenerationRequest {
        let profile = Self::profile(task);
        GenerationRequest {
            prompt: format!(
                "{}\n\nContent to analyse:\n{}",
                Self::for_task(task),
                content
            ),
            temperature: profile.temperature,
            max_output_tokens: profile.max_output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_exist_for_every_task() {
        for task in [TaskType::Extract, TaskType::Summarize, TaskType::Query] {
            assert!(!PromptTemplates::for_task(task).is_empty());
        }
    }

    #[test]
    fn test_extract_template_demands_bare_json() {
        let prompt = PromptTemplates::extract();
        assert!(prompt.contains("ONLY valid JSON"));
        for key in crate::domain::models::ExtractionRecord::FIELDS {
            assert!(prompt.contains(&format!("\"{}\"", key)), "missing {}", key);
        }
    }

    #[test]
    fn test_query_template_has_not_found_fallback() {
        assert!(PromptTemplates::query().contains("say so clearly"));
    }

    #[test]
    fn test_profile_ordering() {
        let extract = PromptTemplates::profile(TaskType::Extract);
        let query = PromptTemplates::profile(TaskType::Query);
        let summarize = PromptTemplates::profile(TaskType::Summarize);

        assert!(extract.max_output_tokens < query.max_output_tokens);
        assert!(query.max_output_tokens < summarize.max_output_tokens);
        assert!(extract.temperature < query.temperature);
        assert!(extract.temperature < summarize.temperature);
    }

    #[test]
    fn test_build_appends_content_verbatim() {
        let content = "Filename: 2024-03-01_BudgetReview.txt";
        let request = PromptTemplates::build(TaskType::Extract, content);
        assert!(request.prompt.ends_with(content));
        assert!(request.prompt.contains("Content to analyse:"));
        assert_eq!(request.max_output_tokens, 400);
    }

    #[test]
    fn test_build_keeps_empty_content() {
        let request = PromptTemplates::build(TaskType::Query, "");
        assert!(request.prompt.ends_with("Content to analyse:\n"));
    }
}
