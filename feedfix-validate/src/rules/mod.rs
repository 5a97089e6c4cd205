use crate::accumulator::IssueAccumulator;
use crate::context::RuleContext;
use feedfix_profiles::{ConfigError, FormatRuleSet, RuleKind};

mod columns;
mod formats;
mod identifiers;
mod values;
mod variants;

/// One step of the validation pipeline.
///
/// Rules append issues; they never mutate the table and never see each
/// other's output. A rule may only inspect columns it is configured for.
pub(crate) trait Rule {
    fn check(&self, cx: &RuleContext<'_>, out: &mut IssueAccumulator) -> Result<(), ConfigError>;
}

/// The profile's rule list, in its declared order.
pub(crate) fn rules_for(ruleset: &FormatRuleSet) -> Vec<Box<dyn Rule>> {
    ruleset
        .rules
        .iter()
        .map(|kind| -> Box<dyn Rule> {
            match kind {
                RuleKind::RequiredColumns => Box::new(columns::RequiredColumns),
                RuleKind::RecommendedColumns => Box::new(columns::RecommendedColumns),
                RuleKind::RequiredValues => Box::new(values::RequiredValues),
                RuleKind::FieldFormats => Box::new(formats::FieldFormats),
                RuleKind::VariantGroups => Box::new(variants::VariantGroups),
                RuleKind::IdentifierUniqueness => Box::new(identifiers::IdentifierUniqueness),
            }
        })
        .collect()
}
