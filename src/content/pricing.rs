//! Pricing page copy.
//!
//! Unlike the document-backed pages, pricing has a fixed structure (hero,
//! plan, accordion, trust, final CTA), so it is a typed static table.

use crate::i18n::{Locale, Localized};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingHero {
    pub h1: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
    pub cta_microcopy: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    /// Brand name, never translated.
    pub name: &'static str,
    pub tagline: &'static str,
    pub pricing_label: &'static str,
    pub features: &'static [&'static str],
    pub deployment_options: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingAccordion {
    pub title: &'static str,
    pub factors: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingFinalCta {
    pub heading: &'static str,
    pub cta: &'static str,
    pub microcopy: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingTrust {
    pub heading: &'static str,
    pub points: &'static [&'static str],
}

/// Everything the pricing page shows, for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingContent {
    pub metadata: PricingMetadata,
    pub hero: PricingHero,
    pub plan: PricingPlan,
    pub accordion: PricingAccordion,
    #[serde(rename = "finalCTA")]
    pub final_cta: PricingFinalCta,
    pub trust: PricingTrust,
}

const PLAN_NAME: &str = "HEIMDEX Access";

pub static PRICING: Localized<PricingContent> = Localized::new(
    PricingContent {
        metadata: PricingMetadata {
            title: "가격 | HEIMDEX",
            description: "HEIMDEX Access 단일 플랜. 영상 규모·검색 방식·배포 환경에 맞춘 워크플로우 기반 맞춤 견적.",
        },
        hero: PricingHero {
            h1: "하나의 플랜. 당신의 워크플로우에 맞게.",
            subheadline: "영상 규모, 검색 방식, 배포 환경은 모두 다릅니다. HEIMDEX는 기능 단위가 아니라 운영 구조 전체를 기준으로 설계됩니다.",
            cta: "HEIMDEX와 통화 예약하기",
            cta_microcopy: "15분이면 충분합니다.",
        },
        plan: PricingPlan {
            name: PLAN_NAME,
            tagline: "AI 기반 영상 이해·검색·재활용을 위한 단일 플랜",
            pricing_label: "워크플로우 기반 맞춤 견적",
            features: &[
                "자동 영상 처리 (장면 분석, 음성 인식, 시각 분석)",
                "다국어 음성 인식 (한국어, 영어 포함 90개 이상 언어)",
                "지능형 장면 분할 및 키프레임 추출",
                "하이브리드 시맨틱 검색 (Dense + BM25)",
                "인물 기반 검색 (참조 사진 활용)",
                "YouTube Shorts / 하이라이트 자동 생성",
                "분석 대시보드 및 검색 인사이트",
                "한영 이중 언어 UI",
                "보안 공유 및 임시 다운로드",
            ],
            deployment_options: "클라우드 / 온프레미스 / 하이브리드",
        },
        accordion: PricingAccordion {
            title: "요금은 무엇에 따라 달라지나요?",
            factors: &[
                "월 처리 영상량",
                "검색 빈도 및 채널 구성",
                "인물 검색 사용 여부",
                "배포 환경 (클라우드 / 온프레미스)",
                "팀 규모 및 협업 요구사항",
            ],
        },
        final_cta: PricingFinalCta {
            heading: "당신의 워크플로우에 맞춘 견적을 받아보세요",
            cta: "HEIMDEX와 통화 예약하기",
            microcopy: "15분 통화로 현재 영상 관리 방식과 문제를 빠르게 진단하고, HEIMDEX가 줄일 수 있는 작업 시간을 함께 계산해드립니다.",
        },
        trust: PricingTrust {
            heading: "안전하고 맞춤형으로",
            points: &[
                "프라이버시 우선: 영상은 고객 인프라를 떠나지 않습니다",
                "맞춤 구성: 기존 워크플로우와 통합되도록 설계",
                "투명한 가격: 숨은 비용 없이 명확한 견적",
            ],
        },
    },
    PricingContent {
        metadata: PricingMetadata {
            title: "Pricing | HEIMDEX",
            description: "One plan, tailored to your workflow. HEIMDEX Access is priced by processing volume, search usage, and deployment environment.",
        },
        hero: PricingHero {
            h1: "One plan. Tailored to your workflow.",
            subheadline: "Video volume, search behavior, and deployment constraints vary. HEIMDEX is designed around your operating workflow — not feature tiers.",
            cta: "Arrange a call with Heimdex",
            cta_microcopy: "15 minutes is enough.",
        },
        plan: PricingPlan {
            name: PLAN_NAME,
            tagline: "A single plan for AI-powered video understanding, search, and reuse",
            pricing_label: "Workflow-based custom quote",
            features: &[
                "Automated video processing (scene detection, transcription, visual analysis)",
                "Multi-language transcription (KO/EN + 90+ languages)",
                "Intelligent scene segmentation + keyframes",
                "Hybrid semantic search (dense + BM25)",
                "Person-aware search via reference photos",
                "YouTube Shorts / highlight reel exports",
                "Analytics dashboard + search insights",
                "Bilingual UI (Korean/English)",
                "Secure sharing + temporary downloads",
            ],
            deployment_options: "Cloud / On-premise / Hybrid",
        },
        accordion: PricingAccordion {
            title: "What affects pricing?",
            factors: &[
                "Monthly processing volume",
                "Search frequency and channel mix",
                "People search usage (reference photos)",
                "Deployment environment (cloud / on-prem / hybrid)",
                "Team size and collaboration needs",
            ],
        },
        final_cta: PricingFinalCta {
            heading: "Get a quote tailored to your workflow",
            cta: "Arrange a call with Heimdex",
            microcopy: "In a 15-minute call, we'll quickly diagnose your current video management methods and problems, and calculate the work hours HEIMDEX can save together.",
        },
        trust: PricingTrust {
            heading: "Secure and tailored",
            points: &[
                "Privacy-first: Videos never leave your infrastructure",
                "Custom configuration: Designed to integrate with existing workflows",
                "Transparent pricing: Clear quotes with no hidden costs",
            ],
        },
    },
);

/// Pricing copy for `locale`.
pub fn pricing_content(locale: Locale) -> &'static PricingContent {
    PRICING.get(locale)
}

/// Differences in shape between locales, empty when every locale matches.
///
/// Compares top-level sections and the lengths of the list fields.
pub fn parity_issues(table: &Localized<PricingContent>) -> Vec<String> {
    let mut issues = Vec::new();
    let reference = table.get(Locale::DEFAULT);
    let reference_keys = top_level_keys(reference);

    for (locale, content) in table.iter().skip(1) {
        let keys = top_level_keys(content);
        if keys != reference_keys {
            issues.push(format!(
                "{locale}: sections {keys:?} differ from {}: {reference_keys:?}",
                Locale::DEFAULT
            ));
        }

        let lists = [
            ("plan.features", reference.plan.features.len(), content.plan.features.len()),
            ("accordion.factors", reference.accordion.factors.len(), content.accordion.factors.len()),
            ("trust.points", reference.trust.points.len(), content.trust.points.len()),
        ];
        for (field, expected, actual) in lists {
            if expected != actual {
                issues.push(format!(
                    "{locale}: `{field}` has {actual} entries, {} has {expected}",
                    Locale::DEFAULT
                ));
            }
        }

        if content.plan.name != reference.plan.name {
            issues.push(format!(
                "{locale}: plan name `{}` differs from `{}`",
                content.plan.name, reference.plan.name
            ));
        }
    }

    for (locale, content) in table.iter() {
        if content.plan.features.is_empty() {
            issues.push(format!("{locale}: `plan.features` is empty"));
        }
    }

    issues
}

fn top_level_keys(content: &PricingContent) -> Vec<String> {
    let mut keys: Vec<String> = match serde_json::to_value(content) {
        Ok(serde_json::Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };
    keys.sort();
    keys
}
