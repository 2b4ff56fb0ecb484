//! Operation and parameter extraction from documentation markup.
//!
//! The markup is parsed with [`scraper`] and every extraction point is
//! located with a CSS selector from [`Selectors`]:
//!
//! ```text
//! <operation>
//!   <span class="operation-api-url-path">/v1/key/info</span>
//!   <params-list>
//!     <div class="param">
//!       <span class="param-name-wrap">limit</span>
//!       <span class="param-type">integer</span>
//!       <div class="param-description">Max rows</div>
//!       <span class="param-default">100</span>     (optional)
//!     </div>
//!   </params-list>
//! </operation>
//! ```
//!
//! A missing url, parameter table, name, type or description aborts the whole
//! extraction. A default value is recorded only when exactly one matches.

use crate::config::{ExtractConfig, ExtractMode, Selectors};
use crate::error::{ExtractError, ExtractResult};
use apitree_core::{FlatMapping, ParamDescriptor};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// Parsed form of [`Selectors`].
#[derive(Debug)]
struct CompiledSelectors {
    operation: Selector,
    url: Selector,
    params_list: Selector,
    param: Selector,
    name: Selector,
    ty: Selector,
    description: Selector,
    default: Selector,
}

impl CompiledSelectors {
    fn compile(selectors: &Selectors) -> ExtractResult<Self> {
        Ok(Self {
            operation: parse_selector("operation", &selectors.operation)?,
            url: parse_selector("url", &selectors.url)?,
            params_list: parse_selector("params_list", &selectors.params_list)?,
            param: parse_selector("param", &selectors.param)?,
            name: parse_selector("name", &selectors.name)?,
            ty: parse_selector("type", &selectors.ty)?,
            description: parse_selector("description", &selectors.description)?,
            default: parse_selector("default", &selectors.default)?,
        })
    }
}

fn parse_selector(field: &'static str, selector: &str) -> ExtractResult<Selector> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        field,
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Scrapes operations into a [`FlatMapping`].
#[derive(Debug)]
pub struct Extractor {
    mode: ExtractMode,
    selectors: CompiledSelectors,
}

impl Extractor {
    /// Create an extractor, validating every configured selector.
    pub fn new(config: &ExtractConfig) -> ExtractResult<Self> {
        Ok(Self {
            mode: config.mode,
            selectors: CompiledSelectors::compile(&config.selectors)?,
        })
    }

    pub fn mode(&self) -> ExtractMode {
        self.mode
    }

    /// Extract every operation of a document into a new mapping.
    pub fn extract(&self, markup: &str) -> ExtractResult<FlatMapping> {
        self.extract_into(markup, FlatMapping::new())
    }

    /// Extract every operation of a document into `mapping` and hand it back.
    ///
    /// Operations are visited in document order; an operation whose path is
    /// already present replaces the earlier parameters.
    pub fn extract_into(&self, markup: &str, mut mapping: FlatMapping) -> ExtractResult<FlatMapping> {
        let document = Html::parse_document(markup);
        let mut operations = 0usize;

        for (index, operation) in document.select(&self.selectors.operation).enumerate() {
            let (path, params) = self.extract_operation(operation, index)?;
            debug!(path = %path, params = params.len(), "extracted operation");
            if mapping.insert(path.clone(), params).is_some() {
                debug!(path = %path, "operation replaces an earlier entry");
            }
            operations += 1;
        }

        info!(operations, endpoints = mapping.len(), "extracted documentation");
        Ok(mapping)
    }

    fn extract_operation(
        &self,
        operation: ElementRef<'_>,
        index: usize,
    ) -> ExtractResult<(String, Vec<ParamDescriptor>)> {
        let context = format!("operation #{}", index + 1);
        let path = element_text(self.required(operation, &self.selectors.url, "url", &context)?);

        let context = format!("operation {path}");
        let list = self.required(
            operation,
            &self.selectors.params_list,
            "parameter list",
            &context,
        )?;

        let params = list
            .select(&self.selectors.param)
            .enumerate()
            .map(|(i, param)| {
                self.extract_param(param, &format!("parameter #{} of {path}", i + 1))
            })
            .collect::<ExtractResult<Vec<_>>>()?;

        Ok((path, params))
    }

    fn extract_param(&self, param: ElementRef<'_>, context: &str) -> ExtractResult<ParamDescriptor> {
        let name = element_text(self.required(param, &self.selectors.name, "param name", context)?);
        let ty = element_text(self.required(param, &self.selectors.ty, "param type", context)?);
        let desc = element_text(self.required(
            param,
            &self.selectors.description,
            "param description",
            context,
        )?);

        let mut defaults = param.select(&self.selectors.default);
        let defa = match (defaults.next(), defaults.next()) {
            (Some(only), None) => Some(element_text(only)),
            (Some(_), Some(_)) => {
                debug!(param = %name, "several default values, recording none");
                None
            }
            (None, _) => None,
        };

        Ok(ParamDescriptor {
            name,
            ty,
            desc,
            defa,
        })
    }

    /// First match of a required extraction point.
    ///
    /// Strict mode rejects any further match.
    fn required<'a>(
        &self,
        scope: ElementRef<'a>,
        selector: &Selector,
        element: &'static str,
        context: &str,
    ) -> ExtractResult<ElementRef<'a>> {
        let mut matches = scope.select(selector);
        let first = matches.next().ok_or_else(|| ExtractError::MissingElement {
            element,
            context: context.to_string(),
        })?;

        if self.mode == ExtractMode::Strict {
            let extra = matches.count();
            if extra > 0 {
                return Err(ExtractError::Ambiguous {
                    element,
                    context: context.to_string(),
                    count: extra + 1,
                });
            }
        }

        Ok(first)
    }
}

/// Text of an element: each text node trimmed, blanks dropped, joined without separator.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}
