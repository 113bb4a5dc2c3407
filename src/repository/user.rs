//! Repository implementation for user accounts.

use chrono::Utc;
use diesel::prelude::*;

use crate::{
    domain::user::{NewUser, UpdateProfile, User},
    models::user::{NewUser as DbNewUser, User as DbUser},
    repository::{DieselRepository, UserReader, UserWriter, errors::RepositoryResult},
};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .find(id)
            .select(DbUser::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email))
            .select(DbUser::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let row: DbNewUser = new_user.into();

        let user: DbUser = diesel::insert_into(users::table)
            .values(&row)
            .get_result(&mut conn)?;

        Ok(user.into())
    }

    fn update_user_profile(
        &self,
        user_id: i32,
        updates: &UpdateProfile,
    ) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        // Absent fields keep their stored value.
        let current: DbUser = users::table
            .find(user_id)
            .select(DbUser::as_select())
            .first(&mut conn)?;

        let nickname = updates.nickname.clone().or(current.nickname);
        let bio = updates.bio.clone().or(current.bio);

        let user: DbUser = diesel::update(users::table.find(user_id))
            .set((
                users::nickname.eq(nickname),
                users::bio.eq(bio),
                users::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result(&mut conn)?;

        Ok(user.into())
    }

    fn set_user_password(&self, user_id: i32, password_hash: &str) -> RepositoryResult<()> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        diesel::update(users::table.find(user_id))
            .set((
                users::password_hash.eq(password_hash),
                users::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(&mut conn)?;
        Ok(())
    }

    fn set_user_avatar(&self, user_id: i32, avatar_url: &str) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let user: DbUser = diesel::update(users::table.find(user_id))
            .set((
                users::avatar.eq(avatar_url),
                users::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result(&mut conn)?;

        Ok(user.into())
    }
}
