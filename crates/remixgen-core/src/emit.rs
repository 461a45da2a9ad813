//! TSX component emission and module assembly.
//!
//! The emitted text is the generated *library*, not generator plumbing: each
//! fragment defines one memoized React component rendering a 24×24 square
//! viewbox with a single path, and the header declares the shared prop
//! contract every component reuses. The wrapping `memo` makes each component
//! referentially stable across re-renders; construction cost is paid once at
//! module load.

use std::collections::HashMap;

use crate::error::GenerateError;
use crate::icon::ValidatedIcon;

/// Logical viewbox size of every icon, in both dimensions.
pub const VIEWBOX_SIZE: u32 = 24;

/// Shared type declarations emitted once at the top of the module.
///
/// `children?: never` keeps the components leaf-only at the type level, and
/// `ReservedProps` excludes the props the template itself controls from the
/// pass-through surface.
pub const MODULE_HEADER: &str = r#"
import { ComponentType, SVGProps, memo } from 'react';

type AllSVGProps = SVGProps<SVGSVGElement>

type ReservedProps = 'color' | 'size' | 'width' | 'height' | 'fill' | 'viewBox'

export interface RemixiconReactIconProps extends Pick<AllSVGProps, Exclude<keyof AllSVGProps, ReservedProps>> {
  color?: string;
  size?: number | string;
  children?: never;
}
export type RemixiconReactIconComponentType = ComponentType<RemixiconReactIconProps>;
"#;

/// Renders one validated icon into its memoized component definition.
pub fn emit_component(icon: &ValidatedIcon) -> String {
    format!(
        r#"
export const {name}: RemixiconReactIconComponentType = memo(
    function {name}({{ color = 'currentColor', size = 24, children, ...props }}) {{
        const className = 'remixicon-icon ' + (props.className || '');
        return (
            <svg {{...props}} className={{className}} width={{size}} height={{size}} fill={{color}} viewBox="0 0 {size} {size}">
                <path d="{path}" />
            </svg>
        );
    }}
);
"#,
        name = icon.identifier,
        path = icon.path_data,
        size = VIEWBOX_SIZE,
    )
}

/// Concatenates the shared header with every component fragment, in the
/// order given (file-discovery order).
///
/// Distinct file stems that normalize to the same identifier would silently
/// shadow one another in the emitted module, so the fold rejects collisions.
///
/// # Errors
///
/// [`GenerateError::DuplicateIdentifier`] naming the identifier and both
/// source stems.
pub fn assemble_module(icons: &[ValidatedIcon]) -> Result<String, GenerateError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    let mut module = String::from(MODULE_HEADER);
    for icon in icons {
        if let Some(first) = seen.insert(icon.identifier.as_str(), icon.raw_name.as_str()) {
            return Err(GenerateError::DuplicateIdentifier {
                identifier: icon.identifier.clone(),
                first: first.to_string(),
                second: icon.raw_name.clone(),
            });
        }
        module.push_str(&emit_component(icon));
    }
    Ok(module)
}
