//! User model -> entity mapper

use recipe_core::entities::User;
use recipe_core::value_objects::UserId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::from_uuid(model.id),
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
