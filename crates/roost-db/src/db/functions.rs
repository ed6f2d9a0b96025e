use diesel::define_sql_function;
use diesel::sql_types::Text;

define_sql_function! {
    /// SQL `lower()`, used for case-insensitive email comparison.
    fn lower(x: Text) -> Text;
}
