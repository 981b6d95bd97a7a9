// All LLM prompt constants for the recommendation workflow, plus the
// renderer that fills them. Two languages are supported: zh and en.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::event::Event;
use crate::models::holiday::Holiday;
use crate::recommendations::profiles::region_profile;

/// Product being marketed.
pub const PRODUCT_NAME: &str = "Winner12";

/// `event_types.id` of "Marketing Campaign".
pub const MARKETING_CAMPAIGN_EVENT_TYPE_ID: i32 = 2;

#[derive(Debug, Error, PartialEq)]
pub enum PromptError {
    #[error("unsupported language '{0}' (expected 'zh' or 'en')")]
    UnsupportedLanguage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
}

impl FromStr for Language {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            other => Err(PromptError::UnsupportedLanguage(other.to_string())),
        }
    }
}

pub const SYSTEM_ZH: &str = "你是Winner12足球预测产品的专业营销推广专家。\
专门为足球爱好者和体育投注用户制定精准的营销策略，基于足球文化和赛事节奏生成高转化率的营销推荐。";

pub const SYSTEM_EN: &str = "You are a professional marketing expert for Winner12 football prediction product. \
Specializing in creating precise marketing strategies for football enthusiasts and sports betting users, \
generating high-conversion marketing recommendations based on football culture and match rhythms.";

/// Replace: {product}, {region_name}, {culture}, {popular_teams}, {start_date},
///          {end_date}, {existing_events}, {holidays}, {event_type_id}
pub const RECOMMENDATION_PROMPT_ZH: &str = r#"你是{product}足球预测产品的专业营销推广人员。{product}是一款使用AI技术进行足球比赛预测的创新产品，帮助用户提高足球投注和预测的准确性。

## 产品背景
- 产品名称：{product} AI足球预测
- 核心功能：AI驱动的足球比赛结果预测
- 目标用户：足球爱好者、体育投注者、数据分析师
- 竞争优势：高精度预测算法、实时数据分析、用户友好界面

## 目标区域分析
推广区域：{region_name}
足球文化特色：{culture}
热门球队：{popular_teams}

## 营销日历数据
时间段: {start_date} 到 {end_date}

现有事件:
{existing_events}

此期间的节假日:
{holidays}

## 营销推荐策略要求
请基于{product}足球预测产品特性，为{region_name}地区生成3-5个高转化率的足球相关营销节日推荐：

### 优先推荐类型：
1. **重大足球赛事期间** - 世界杯、欧洲杯、美洲杯、亚洲杯等国际大赛
2. **联赛关键节点** - 赛季开始、转会窗口、季后赛、总决赛
3. **本地足球文化节日** - 当地球队成立纪念日、重要比赛纪念日
4. **足球相关国际日** - 世界足球日、反种族主义日等
5. **体育博彩热点时期** - 重要比赛前后、赔率波动期

### 营销角度建议：
- 强调AI预测的准确性和科技感
- 结合当地足球文化和热门球队
- 突出产品在重要比赛中的价值
- 利用足球情感营销和社区归属感
- 展示数据分析的专业性和可靠性

### 避免推荐：
- 与足球无关的普通节日
- 可能引起争议的敏感话题
- 与现有事件冲突的时间点
- 缺乏商业转化价值的纪念日

## 输出要求
对于每个推荐，请提供：
- title: 吸引足球爱好者的营销活动名称
- description: 详细的{product}产品推广策略，包括目标用户、营销卖点、预期效果
- suggestedDate: YYYY-MM-DD格式的最佳营销时机
- confidenceScore: 0.7-1.0之间的推荐信心度（基于足球相关性和商业价值）
- reasoning: 详细说明为什么这个时机适合推广{product}，包括足球背景、用户需求、竞争优势
- eventTypeId: {event_type_id}表示营销活动

请严格按照以下JSON格式回复：
{
  "recommendations": [
    {
      "title": "{product}足球预测营销活动标题",
      "description": "针对足球爱好者的详细推广策略",
      "suggestedDate": "YYYY-MM-DD",
      "confidenceScore": 0.85,
      "reasoning": "基于足球文化和{product}产品特性的推荐理由",
      "eventTypeId": {event_type_id}
    }
  ]
}"#;

/// Same placeholders as [`RECOMMENDATION_PROMPT_ZH`].
pub const RECOMMENDATION_PROMPT_EN: &str = r#"You are a professional marketing specialist for {product}, an AI-powered football match prediction product. {product} uses advanced AI technology to help users improve their football betting and prediction accuracy.

## Product Background
- Product Name: {product} AI Football Prediction
- Core Function: AI-driven football match result prediction
- Target Users: Football enthusiasts, sports bettors, data analysts
- Competitive Advantage: High-precision prediction algorithms, real-time data analysis, user-friendly interface

## Target Region Analysis
Marketing Region: {region_name}
Football Culture: {culture}
Popular Teams: {popular_teams}

## Marketing Calendar Data
Time Period: {start_date} to {end_date}

Existing Events:
{existing_events}

Holidays during this period:
{holidays}

## Marketing Strategy Requirements
Based on {product}'s football prediction product features, generate 3-5 high-conversion football-related marketing holiday recommendations for {region_name}:

### Priority Recommendation Types:
1. **Major Football Events** - World Cup, European Championship, Copa America, Asian Cup, etc.
2. **League Key Moments** - Season start, transfer windows, playoffs, finals
3. **Local Football Culture Days** - Local team anniversaries, important match commemorations
4. **Football-related International Days** - World Football Day, Anti-Racism Day, etc.
5. **Sports Betting Hot Periods** - Before/after important matches, odds fluctuation periods

### Marketing Angle Suggestions:
- Emphasize AI prediction accuracy and technology
- Combine local football culture and popular teams
- Highlight product value during important matches
- Use football emotional marketing and community belonging
- Showcase data analysis professionalism and reliability

### Avoid Recommending:
- Non-football related ordinary holidays
- Potentially controversial sensitive topics
- Time conflicts with existing events
- Commemorative days lacking commercial conversion value

## Output Requirements
For each recommendation, provide:
- title: Marketing activity name that attracts football enthusiasts
- description: Detailed {product} product promotion strategy, including target users, marketing selling points, expected results
- suggestedDate: Optimal marketing timing in YYYY-MM-DD format
- confidenceScore: Recommendation confidence between 0.7-1.0 (based on football relevance and commercial value)
- reasoning: Detailed explanation of why this timing suits {product} promotion, including football background, user needs, competitive advantages
- eventTypeId: {event_type_id} for marketing campaigns

Please respond strictly in the following JSON format:
{
  "recommendations": [
    {
      "title": "{product} Football Prediction Marketing Campaign Title",
      "description": "Detailed promotion strategy targeting football enthusiasts",
      "suggestedDate": "YYYY-MM-DD",
      "confidenceScore": 0.85,
      "reasoning": "Recommendation reason based on football culture and {product} product features",
      "eventTypeId": {event_type_id}
    }
  ]
}"#;

// Fallback draft text. Replace: {product}, {region_name}

pub const FALLBACK_TITLE_ZH: &str = "{product} {region_name}足球预测推广活动";
pub const FALLBACK_DESCRIPTION_ZH: &str = "针对{region_name}足球爱好者的{product} AI预测产品专项推广，\
结合当地足球文化特色，提升用户对AI足球预测的认知和使用率";
pub const FALLBACK_REASONING_ZH: &str = "{region_name}地区具有浓厚的足球文化氛围，\
{product}的AI预测功能能够满足当地足球爱好者对比赛分析的需求，是理想的产品推广时机";

pub const FALLBACK_TITLE_EN: &str = "{product} {region_name} Football Prediction Campaign";
pub const FALLBACK_DESCRIPTION_EN: &str = "Specialized {product} AI prediction product promotion \
targeting {region_name} football enthusiasts, combining local football culture to enhance user \
awareness and adoption of AI football prediction";
pub const FALLBACK_REASONING_EN: &str = "{region_name} region has a strong football culture \
atmosphere, {product}'s AI prediction features can meet local football fans' needs for match \
analysis, making it an ideal product promotion opportunity";

impl Language {
    pub fn system_prompt(self) -> &'static str {
        match self {
            Language::Zh => SYSTEM_ZH,
            Language::En => SYSTEM_EN,
        }
    }

    fn template(self) -> &'static str {
        match self {
            Language::Zh => RECOMMENDATION_PROMPT_ZH,
            Language::En => RECOMMENDATION_PROMPT_EN,
        }
    }

    /// `(title, description, reasoning)` templates for the fallback draft.
    pub fn fallback_templates(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Language::Zh => (FALLBACK_TITLE_ZH, FALLBACK_DESCRIPTION_ZH, FALLBACK_REASONING_ZH),
            Language::En => (FALLBACK_TITLE_EN, FALLBACK_DESCRIPTION_EN, FALLBACK_REASONING_EN),
        }
    }

    fn on(self) -> &'static str {
        match self {
            Language::Zh => "在",
            Language::En => "on",
        }
    }

    fn no_description(self) -> &'static str {
        match self {
            Language::Zh => "无描述",
            Language::En => "No description",
        }
    }
}

/// Renders the recommendation prompt. Existing events and holidays are listed
/// in input order as `- <title> on <date> (<description>)`.
pub fn build_prompt(
    language: Language,
    region_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    existing_events: &[Event],
    existing_holidays: &[Holiday],
) -> String {
    let profile = region_profile(language, region_id);

    let events = existing_events
        .iter()
        .map(|e| calendar_line(language, &e.title, e.start_date, e.description.as_deref()))
        .collect::<Vec<_>>()
        .join("\n");
    let holidays = existing_holidays
        .iter()
        .map(|h| calendar_line(language, &h.name, h.date, h.description.as_deref()))
        .collect::<Vec<_>>()
        .join("\n");

    let event_type_id = MARKETING_CAMPAIGN_EVENT_TYPE_ID.to_string();
    let start_date = start_date.to_string();
    let end_date = end_date.to_string();
    render(
        language.template(),
        &[
            ("product", PRODUCT_NAME),
            ("region_name", profile.name),
            ("culture", profile.culture),
            ("popular_teams", profile.popular_teams),
            ("start_date", &start_date),
            ("end_date", &end_date),
            ("event_type_id", &event_type_id),
            ("existing_events", &events),
            ("holidays", &holidays),
        ],
    )
}

/// Fills one of the fallback templates.
pub fn render_fallback(template: &str, region_name: &str) -> String {
    render(
        template,
        &[("product", PRODUCT_NAME), ("region_name", region_name)],
    )
}

/// Substitutes `{name}` placeholders in one pass over `template`.
/// Substituted text is never rescanned, so values containing braces come
/// through verbatim. Unknown `{...}` sequences are copied as-is.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn calendar_line(
    language: Language,
    title: &str,
    date: NaiveDate,
    description: Option<&str>,
) -> String {
    let description = description
        .filter(|d| !d.is_empty())
        .unwrap_or(language.no_description());
    format!("- {title} {} {date} ({description})", language.on())
}
