use crate::entities::business_idea::{BusinessIdea, IdeaAnalysis, SwotAnalysis, MAX_VIABILITY_SCORE};

/// Descriptions longer than this many characters count as detailed
const DETAILED_DESCRIPTION_CHARS: usize = 100;

/// Market potential label for a viability score
pub fn market_potential(score: u8) -> &'static str {
    if score > 70 {
        "strong"
    } else if score > 40 {
        "moderate"
    } else {
        "weak"
    }
}

/// Rule-based analysis of a business idea.
///
/// Each field is checked against a small set of keywords, first match wins.
/// Used whenever the AI provider is unavailable or fails.
pub fn analyze_business_idea(idea: &BusinessIdea) -> IdeaAnalysis {
    let mut score: u32 = 0;
    let mut swot = SwotAnalysis::default();
    let mut risk_factors = Vec::new();

    if idea.description.chars().count() > DETAILED_DESCRIPTION_CHARS {
        score += 20;
        swot.strengths.push("Detailed business description".to_string());
    } else {
        swot.weaknesses.push("Business description could be more detailed".to_string());
    }

    let target_market = idea.target_market.to_lowercase();
    if target_market.contains("global") {
        score += 15;
        swot.opportunities.push("Global market potential".to_string());
        risk_factors.push("International market challenges".to_string());
    } else if target_market.contains("local") {
        score += 10;
        swot.strengths.push("Focused local market approach".to_string());
    }

    let revenue_model = idea.revenue_model.to_lowercase();
    if revenue_model.contains("subscription") {
        score += 20;
        swot.strengths.push("Recurring revenue model".to_string());
    } else if revenue_model.contains("one-time") {
        score += 10;
        swot.weaknesses.push("One-time revenue may limit growth".to_string());
    }

    let cost_structure = idea.cost_structure.to_lowercase();
    if cost_structure.contains("low") {
        score += 15;
        swot.strengths.push("Low cost structure".to_string());
    } else if cost_structure.contains("high") {
        score += 5;
        risk_factors.push("High operational costs".to_string());
    }

    let distribution = idea.distribution_channels.to_lowercase();
    if distribution.contains("online") {
        score += 15;
        swot.strengths.push("Online distribution capability".to_string());
        swot.opportunities.push("Digital market reach".to_string());
    } else if distribution.contains("physical") {
        score += 10;
        risk_factors.push("Physical distribution costs".to_string());
    }

    // Industry labels come from a fixed picker, so these match exactly
    match idea.industry.as_str() {
        "SaaS" => {
            score += 15;
            swot.opportunities.push("Growing SaaS market".to_string());
            swot.strengths.push("Scalable business model".to_string());
        }
        "E-commerce" => {
            score += 10;
            swot.threats.push("High competition in e-commerce".to_string());
        }
        "Services" => {
            score += 12;
            swot.strengths.push("Service-based business stability".to_string());
        }
        _ => {}
    }

    let score = score.min(u32::from(MAX_VIABILITY_SCORE)) as u8;

    let summary = vec![
        format!("{} shows {} market potential", idea.business_name, market_potential(score)),
        format!(
            "Key strength: {}",
            swot.strengths
                .first()
                .map(String::as_str)
                .unwrap_or("Need to identify core strengths")
        ),
        format!(
            "Main challenge: {}",
            swot.threats
                .first()
                .map(String::as_str)
                .unwrap_or("Need to assess market risks")
        ),
    ];

    IdeaAnalysis {
        swot_analysis: swot,
        viability_score: score,
        risk_factors,
        summary,
    }
    .normalized()
}
