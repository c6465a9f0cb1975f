//! Documentation block formatting
//!
//! Pure formatting, no decisions. The decorative section banners inside
//! generated files are static skeleton text; the only block composed at
//! runtime is the doxygen class comment, because it carries the
//! injected author and date.

use crate::context::GenerationContext;

/// The doxygen `@class` documentation block placed above a class
/// declaration.
pub fn doxy_class_comment(class_name: &str, context: &GenerationContext) -> String {
    format!(
        "/** @class {name} {name}.h\n \
         *\n \
         *\n \
         *  @author {author}\n \
         *  @date   {date}\n \
         */",
        name = class_name,
        author = context.author,
        date = context.date,
    )
}
