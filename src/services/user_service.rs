//! User service

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    db::repositories::{
        DailyCount, JudgeRepository, RatingRepository, RegionalRepository, SubmissionRepository,
        TeamRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::users::{
        request::{BindAccountRequest, CreateUserRequest, UpdateUserRequest},
        response::{MedalTally, MemberGroupResponse, MemberResponse, UserProfileResponse},
    },
    models::{JudgeAccount, RegionalAward, TShirtSize, User},
};

/// Judge whose rating is surfaced on profiles and the member list
const RATED_JUDGE_NAME: &str = "codeforces";

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Create a new user
    pub async fn create_user(pool: &PgPool, payload: CreateUserRequest) -> AppResult<User> {
        if UserRepository::find_by_username(pool, &payload.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "user {}",
                payload.username
            )));
        }

        UserRepository::create(
            pool,
            &payload.username,
            &payload.nickname,
            payload.is_admin.unwrap_or(false),
        )
        .await
    }

    /// List users
    pub async fn list_users(pool: &PgPool, only_enabled: bool) -> AppResult<Vec<User>> {
        UserRepository::list(pool, only_enabled).await
    }

    /// Full profile: user, bound accounts, current rating and medal tally
    pub async fn get_profile(pool: &PgPool, username: &str) -> AppResult<UserProfileResponse> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {username}")))?;

        let accounts = JudgeRepository::accounts_for_user(pool, username).await?;
        let rating = Self::current_rating(pool, username).await?;
        let awards = RegionalRepository::awards_for_user(pool, username).await?;
        let medals = MedalTally::from_awards(&awards);

        Ok(UserProfileResponse {
            user,
            accounts,
            rating,
            medals,
            awards,
        })
    }

    /// Update profile fields
    pub async fn update_user(
        pool: &PgPool,
        username: &str,
        payload: UpdateUserRequest,
    ) -> AppResult<User> {
        if let Some(size) = &payload.t_shirt {
            TShirtSize::from_str(size)
                .ok_or_else(|| AppError::InvalidInput(format!("unknown t-shirt size {size}")))?;
        }

        UserRepository::update(
            pool,
            username,
            payload.nickname.as_deref(),
            payload.phone.as_deref(),
            payload.qq.as_deref(),
            payload.t_shirt.as_deref(),
        )
        .await
    }

    /// Enable or disable a user
    pub async fn set_enable(pool: &PgPool, username: &str, is_enable: bool) -> AppResult<()> {
        UserRepository::set_enable(pool, username, is_enable).await
    }

    /// Grant or revoke admin
    pub async fn set_admin(pool: &PgPool, username: &str, is_admin: bool) -> AppResult<()> {
        UserRepository::set_admin(pool, username, is_admin).await
    }

    /// A user's account bindings
    pub async fn accounts(pool: &PgPool, username: &str) -> AppResult<Vec<JudgeAccount>> {
        JudgeRepository::accounts_for_user(pool, username).await
    }

    /// Bind (or re-bind) an account handle
    pub async fn bind_account(
        pool: &PgPool,
        username: &str,
        payload: BindAccountRequest,
    ) -> AppResult<()> {
        UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {username}")))?;

        JudgeRepository::bind_account(pool, username, payload.judge_id, &payload.handle).await
    }

    /// Daily solved/submitted calendar over a date range
    pub async fn submission_calendar(
        pool: &PgPool,
        username: &str,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<DailyCount>> {
        SubmissionRepository::daily_counts(pool, username, begin, end).await
    }

    /// Official members grouped by grade cohort, with rating and medals
    pub async fn members(pool: &PgPool) -> AppResult<Vec<MemberGroupResponse>> {
        let groups = TeamRepository::list_groups(pool).await?;

        let mut result = Vec::new();
        for group in groups.into_iter().filter(|g| g.is_grade) {
            let usernames = TeamRepository::usernames_in_group(pool, group.id).await?;
            let users = UserRepository::simple_by_usernames(pool, &usernames).await?;

            let mut members = Vec::with_capacity(users.len());
            for user in users {
                let rating = Self::current_rating(pool, &user.username).await?;
                let awards = RegionalRepository::awards_for_user(pool, &user.username).await?;
                members.push(MemberResponse {
                    username: user.username,
                    nickname: user.nickname,
                    rating,
                    medals: MedalTally::from_awards(&awards),
                });
            }
            result.push(MemberGroupResponse { group, members });
        }
        Ok(result)
    }

    async fn current_rating(pool: &PgPool, username: &str) -> AppResult<Option<i32>> {
        let Some(judge) = JudgeRepository::find_by_name(pool, RATED_JUDGE_NAME).await? else {
            return Ok(None);
        };
        RatingRepository::current_rating(pool, username, judge.id).await
    }
}

impl MedalTally {
    /// Count gold/silver/bronze medals in a set of awards
    pub fn from_awards(awards: &[RegionalAward]) -> Self {
        let mut tally = MedalTally::default();
        for award in awards {
            match award.medal {
                1 => tally.gold += 1,
                2 => tally.silver += 1,
                3 => tally.bronze += 1,
                _ => {}
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn award(medal: i32) -> RegionalAward {
        RegionalAward {
            regional_id: 1,
            team_id: 1,
            medal,
            award: String::new(),
        }
    }

    #[test]
    fn medal_tally_counts_by_color() {
        let awards = vec![award(1), award(3), award(3), award(0), award(2)];
        let tally = MedalTally::from_awards(&awards);
        assert_eq!(tally.gold, 1);
        assert_eq!(tally.silver, 1);
        assert_eq!(tally.bronze, 2);
    }
}
