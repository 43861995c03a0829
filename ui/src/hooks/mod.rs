mod hook_state;
pub mod use_album_images;
pub mod use_all_albums;
pub mod use_create_album;
pub mod use_delete_album;
pub mod use_edit_album_description;
pub mod use_fetch;
pub mod use_mutation;
pub mod use_view_album;

pub use payloads::{FetchState, RequestError, RequestState};
pub use use_album_images::{
    use_add_image_to_album, use_add_multiple_images_to_album,
    use_remove_image_from_album,
};
pub use use_all_albums::use_all_albums;
pub use use_create_album::use_create_album;
pub use use_delete_album::use_delete_album;
pub use use_edit_album_description::use_edit_album_description;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_mutation::{MutationHookReturn, use_mutation};
pub use use_view_album::use_view_album;
