use chrono::Utc;
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Account, AccountKind, EntityStatus, Game, Operator, OperatorRole, Platform};
use crate::registry::{GatewayError, ReferenceData};
use crate::types::{AccountId, GameId, OperatorId, PlatformId};

/// In-memory reference-data registry with the admin CRUD surface.
///
/// Reference records are created and soft-deleted by the admin screens;
/// deletion is a status flip plus tombstone so historical transactions keep
/// resolving their joins.
pub struct MemoryRegistry {
    accounts: DashMap<AccountId, Account>,
    platforms: DashMap<PlatformId, Platform>,
    games: DashMap<GameId, Game>,
    operators: DashMap<OperatorId, Operator>
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            platforms: DashMap::new(),
            games: DashMap::new(),
            operators: DashMap::new()
        }
    }

    pub fn create_account(
        &self,
        name: impl Into<String>,
        kind: AccountKind,
        monthly_in_limit: Decimal,
        monthly_out_limit: Decimal,
        atm_withdrawal_enabled: bool
    ) -> Account {
        let mut account = Account::new(name, kind, monthly_in_limit, monthly_out_limit);
        account.atm_withdrawal_enabled = atm_withdrawal_enabled;

        debug!("Account [{}] created: {}", account.id, account.name);
        self.accounts.insert(account.id, account.clone());
        account
    }

    /// Updates the configurable knobs on an account. Returns `false` for an
    /// unknown id. Does not coordinate with in-flight admissions: a movement
    /// admitted under the old cap may commit after the cap changes, same as
    /// the backing system this models.
    pub fn update_account_limits(
        &self,
        id: AccountId,
        monthly_in_limit: Decimal,
        monthly_out_limit: Decimal,
        atm_withdrawal_enabled: bool,
        status: Option<EntityStatus>
    ) -> bool {
        let Some(mut account) = self.accounts.get_mut(&id) else {
            return false;
        };

        account.monthly_in_limit = monthly_in_limit;
        account.monthly_out_limit = monthly_out_limit;
        account.atm_withdrawal_enabled = atm_withdrawal_enabled;
        if let Some(status) = status {
            account.status = status;
        }
        account.updated_at = Utc::now();

        true
    }

    pub fn soft_delete_account(&self, id: AccountId, actor: OperatorId) -> bool {
        let Some(mut account) = self.accounts.get_mut(&id) else {
            return false;
        };

        if account.deleted_at.is_none() {
            account.deleted_at = Some(Utc::now());
            account.deleted_by = Some(actor);
        }

        true
    }

    pub fn create_platform(&self, name: impl Into<String>) -> Platform {
        let platform = Platform::new(name);

        debug!("Platform [{}] created: {}", platform.id, platform.name);
        self.platforms.insert(platform.id, platform.clone());
        platform
    }

    pub fn update_platform(
        &self,
        id: PlatformId,
        name: impl Into<String>,
        deposit_url: Option<String>,
        withdraw_url: Option<String>,
        status: EntityStatus
    ) -> bool {
        let Some(mut platform) = self.platforms.get_mut(&id) else {
            return false;
        };

        platform.name = name.into();
        platform.deposit_url = deposit_url;
        platform.withdraw_url = withdraw_url;
        platform.status = status;
        platform.updated_at = Utc::now();

        true
    }

    pub fn soft_delete_platform(&self, id: PlatformId, actor: OperatorId) -> bool {
        let Some(mut platform) = self.platforms.get_mut(&id) else {
            return false;
        };

        if platform.deleted_at.is_none() {
            platform.deleted_at = Some(Utc::now());
            platform.deleted_by = Some(actor);
        }

        true
    }

    pub fn create_game(&self, name: impl Into<String>, tag: impl Into<String>) -> Game {
        let game = Game::new(name, tag);

        self.games.insert(game.id, game.clone());
        game
    }

    pub fn soft_delete_game(&self, id: GameId, actor: OperatorId) -> bool {
        let Some(mut game) = self.games.get_mut(&id) else {
            return false;
        };

        if game.deleted_at.is_none() {
            game.deleted_at = Some(Utc::now());
            game.deleted_by = Some(actor);
        }

        true
    }

    pub fn create_operator(&self, name: impl Into<String>, role: OperatorRole) -> Operator {
        let operator = Operator::new(name, role);

        self.operators.insert(operator.id, operator.clone());
        operator
    }

    /// Accounts eligible for new movements, sorted by name for the selection
    /// grid.
    pub fn active_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .filter(|account| account.is_active())
            .map(|account| account.value().clone())
            .collect();

        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        accounts
    }

    /// All non-deleted accounts, active or not, for the monthly summary.
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .filter(|account| account.deleted_at.is_none())
            .map(|account| account.value().clone())
            .collect();

        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        accounts
    }

    pub fn active_platforms(&self) -> Vec<Platform> {
        let mut platforms: Vec<Platform> = self
            .platforms
            .iter()
            .filter(|platform| platform.is_active())
            .map(|platform| platform.value().clone())
            .collect();

        platforms.sort_by(|a, b| a.name.cmp(&b.name));
        platforms
    }

    pub fn active_games(&self) -> Vec<Game> {
        let mut games: Vec<Game> = self
            .games
            .iter()
            .filter(|game| game.is_active())
            .map(|game| game.value().clone())
            .collect();

        games.sort_by(|a, b| a.name.cmp(&b.name));
        games
    }
}

impl ReferenceData for MemoryRegistry {
    fn get_account(&self, id: AccountId) -> Result<Option<Account>, GatewayError> {
        Ok(self.accounts.get(&id).map(|account| account.value().clone()))
    }

    fn get_platform(&self, id: PlatformId) -> Result<Option<Platform>, GatewayError> {
        Ok(self.platforms.get(&id).map(|platform| platform.value().clone()))
    }

    fn get_game(&self, id: GameId) -> Result<Option<Game>, GatewayError> {
        Ok(self.games.get(&id).map(|game| game.value().clone()))
    }

    fn get_operator(&self, id: OperatorId) -> Result<Option<Operator>, GatewayError> {
        Ok(self.operators.get(&id).map(|operator| operator.value().clone()))
    }
}
