pub mod store;
pub mod supabase;

pub use store::{BorderRecord, BorderRow, BorderStore, ExploitationStore};
pub use supabase::SupabaseClient;
