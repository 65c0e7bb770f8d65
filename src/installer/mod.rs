//! Pack root management: installing, removing and listing packs

pub mod installation;
pub mod listing;
pub mod ops;
pub mod pack;
pub mod pack_info;
pub mod pdsc;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_support;

pub use installation::{Installation, PublicManifestCache};
pub use listing::{list_installed_packs, ListMode, ListedPack, PackListing, PackStatus};
pub use ops::{add_pack, add_pdsc, remove_pack, remove_pdsc, update_public_index};
pub use pack::{prepare_pack, InstallOutcome, PackType};
pub use pack_info::PackInfo;
pub use pdsc::{prepare_pdsc, unregister_pdsc, PdscType};
pub use resolve::find_pack_url;
