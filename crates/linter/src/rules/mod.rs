//! React/TSX lint rules
//!
//! The tslint-react rule set, one module per rule.

pub mod component_no_proptypes;
pub mod jsx_alignment;
pub mod jsx_ban_elements;
pub mod jsx_ban_props;
pub mod jsx_boolean_value;
pub mod jsx_curly_brace_presence;
pub mod jsx_curly_spacing;
pub mod jsx_equals_spacing;
pub mod jsx_key;
pub mod jsx_named_prop_interface;
pub mod jsx_no_array_literal_props;
pub mod jsx_no_bind;
pub mod jsx_no_bind_props;
pub mod jsx_no_jsx_literal_props;
pub mod jsx_no_lambda;
pub mod jsx_no_lambda_props;
pub mod jsx_no_method_ref;
pub mod jsx_no_multiline_js;
pub mod jsx_no_object_literal_props;
pub mod jsx_no_string_ref;
pub mod jsx_prefer_fragment;
pub mod jsx_prop_sorting;
pub mod jsx_self_close;
pub mod jsx_sort_props;
pub mod jsx_space_before_trailing_slash;
pub mod jsx_use_translation_function;
pub mod jsx_whitespace_literal;
pub mod jsx_wrap_mulitlines;
pub mod jsx_wrap_multiline;
pub mod no_access_state_in_setstate;
pub mod no_string_ref;
pub mod react_component_classes_should_implement_scu;
pub mod react_no_unnecessary_fragment;
pub mod react_pure_components_have_primitive_attributes;
pub mod react_pure_components_have_simple_attributes;

// Re-export rule structs and their option types
pub use component_no_proptypes::ComponentNoProptypes;
pub use jsx_alignment::JsxAlignment;
pub use jsx_ban_elements::{BannedElement, JsxBanElements, JsxBanElementsConfig};
pub use jsx_ban_props::{BannedProp, JsxBanProps, JsxBanPropsConfig};
pub use jsx_boolean_value::{BooleanValueOption, JsxBooleanValue, JsxBooleanValueConfig};
pub use jsx_curly_brace_presence::{
    CurlyBracePresence, JsxCurlyBracePresence, JsxCurlyBracePresenceConfig,
};
pub use jsx_curly_spacing::{JsxCurlySpacing, JsxCurlySpacingConfig, SpacingOption};
pub use jsx_equals_spacing::{JsxEqualsSpacing, JsxEqualsSpacingConfig};
pub use jsx_key::JsxKey;
pub use jsx_named_prop_interface::JsxNamedPropInterface;
pub use jsx_no_array_literal_props::JsxNoArrayLiteralProps;
pub use jsx_no_bind::JsxNoBind;
pub use jsx_no_bind_props::JsxNoBindProps;
pub use jsx_no_jsx_literal_props::JsxNoJsxLiteralProps;
pub use jsx_no_lambda::JsxNoLambda;
pub use jsx_no_lambda_props::JsxNoLambdaProps;
pub use jsx_no_method_ref::JsxNoMethodRef;
pub use jsx_no_multiline_js::JsxNoMultilineJs;
pub use jsx_no_object_literal_props::JsxNoObjectLiteralProps;
pub use jsx_no_string_ref::JsxNoStringRef;
pub use jsx_prefer_fragment::{JsxPreferFragment, JsxPreferFragmentConfig};
pub use jsx_prop_sorting::JsxPropSorting;
pub use jsx_self_close::JsxSelfClose;
pub use jsx_sort_props::{JsxSortProps, JsxSortPropsConfig, PropOrder};
pub use jsx_space_before_trailing_slash::JsxSpaceBeforeTrailingSlash;
pub use jsx_use_translation_function::JsxUseTranslationFunction;
pub use jsx_whitespace_literal::JsxWhitespaceLiteral;
pub use jsx_wrap_mulitlines::JsxWrapMulitlines;
pub use jsx_wrap_multiline::{ElementPosition, JsxWrapMultiline};
pub use no_access_state_in_setstate::NoAccessStateInSetstate;
pub use no_string_ref::NoStringRef;
pub use react_component_classes_should_implement_scu::ReactComponentClassesShouldImplementScu;
pub use react_no_unnecessary_fragment::ReactNoUnnecessaryFragment;
pub use react_pure_components_have_primitive_attributes::ReactPureComponentsHavePrimitiveAttributes;
pub use react_pure_components_have_simple_attributes::ReactPureComponentsHaveSimpleAttributes;

use crate::{RuleMeta, RuleMetadata};

/// Metadata of every rule, sorted by name
pub fn all_rule_metadata() -> Vec<RuleMetadata> {
    vec![
        ComponentNoProptypes::metadata(),
        JsxAlignment::metadata(),
        JsxBanElements::metadata(),
        JsxBanProps::metadata(),
        JsxBooleanValue::metadata(),
        JsxCurlyBracePresence::metadata(),
        JsxCurlySpacing::metadata(),
        JsxEqualsSpacing::metadata(),
        JsxKey::metadata(),
        JsxNamedPropInterface::metadata(),
        JsxNoArrayLiteralProps::metadata(),
        JsxNoBind::metadata(),
        JsxNoBindProps::metadata(),
        JsxNoJsxLiteralProps::metadata(),
        JsxNoLambda::metadata(),
        JsxNoLambdaProps::metadata(),
        JsxNoMethodRef::metadata(),
        JsxNoMultilineJs::metadata(),
        JsxNoObjectLiteralProps::metadata(),
        JsxNoStringRef::metadata(),
        JsxPreferFragment::metadata(),
        JsxPropSorting::metadata(),
        JsxSelfClose::metadata(),
        JsxSortProps::metadata(),
        JsxSpaceBeforeTrailingSlash::metadata(),
        JsxUseTranslationFunction::metadata(),
        JsxWhitespaceLiteral::metadata(),
        JsxWrapMulitlines::metadata(),
        JsxWrapMultiline::metadata(),
        NoAccessStateInSetstate::metadata(),
        NoStringRef::metadata(),
        ReactComponentClassesShouldImplementScu::metadata(),
        ReactNoUnnecessaryFragment::metadata(),
        ReactPureComponentsHavePrimitiveAttributes::metadata(),
        ReactPureComponentsHaveSimpleAttributes::metadata(),
    ]
}
