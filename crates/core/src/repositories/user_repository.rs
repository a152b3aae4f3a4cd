use diesel::prelude::*;
use readit_primitives::error::ApiError;
use readit_primitives::models::entities::user::User;
use readit_primitives::schema::users;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<User>, ApiError> {
        users::table
            .find(id)
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::Database)
    }
}
