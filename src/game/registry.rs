//! Game registry: every table in the process and the players seated at them
//!
//! The registry is an explicit object owned by the host. Tables are appended
//! and scanned, never removed, and a table's [`TableId`] is its index.

use crate::core::settings::TableSettings;
use crate::game::error::{GameError, GameResult, Rejection};
use crate::game::events::{GameEvent, Target};
use crate::game::presentation::{PlayerDirectory, Presentation};
use crate::game::table::Table;
use crate::game::types::{Coord, PlayerId, Side, TableId, TableLocation};
use tracing::{debug, info, warn};

/// Outcome of [`GameRegistry::join_queue`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joined {
    pub table: TableId,
    /// 1 for White, 2 for Black
    pub seat: usize,
    pub side: Side,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Default)]
pub struct GameRegistry {
    tables: Vec<Table>,
    settings: TableSettings,
}

impl GameRegistry {
    pub fn new(settings: TableSettings) -> Self {
        GameRegistry {
            tables: Vec::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    /// Seat `player` at the first table still waiting for players, creating
    /// one when none is
    pub fn join_queue(
        &mut self,
        player: PlayerId,
        presentation: &mut dyn Presentation,
        names: &dyn PlayerDirectory,
    ) -> GameResult<Joined> {
        if let Some(id) = self.active_table_of(player) {
            let table = self.table(id)?;
            let side = table
                .side_of(player)
                .ok_or(GameError::UnknownTable { table: id })?;
            debug!("[REGISTRY] {:?} is already seated at table {}", player, id.0);
            return Ok(Joined {
                table: id,
                seat: side.seat_index() + 1,
                side,
                events: vec![GameEvent::status(Rejection::AlreadySeated.to_string())],
            });
        }

        let mut events = Vec::new();
        let id = match self.open_table() {
            Some(id) => id,
            None => self.create_table(presentation, &mut events)?,
        };

        let table = self
            .tables
            .get_mut(id.0)
            .ok_or(GameError::UnknownTable { table: id })?;
        let seat = table.seat(player).ok_or(GameError::TableFull { table: id })?;
        info!(
            "[REGISTRY] {} joined table {} as {}",
            names.display_name(player),
            id.0,
            seat.side
        );
        events.push(GameEvent::PlayerSeated {
            table: id,
            player,
            seat: seat.number,
            side: seat.side,
        });

        if table.is_started() {
            events.push(GameEvent::GameStarted {
                table: id,
                players: table.players().to_vec(),
                location: table.location(),
            });
            let white = table.players()[Side::White.seat_index()];
            events.push(GameEvent::status(format!(
                "It is now {}'s turn",
                names.display_name(white)
            )));
        } else {
            events.push(GameEvent::status(
                Rejection::GameNotStarted.to_string(),
            ));
        }

        Ok(Joined {
            table: id,
            seat: seat.number,
            side: seat.side,
            events,
        })
    }

    /// Route an interaction to the player's table
    pub fn interact(
        &mut self,
        player: PlayerId,
        target: Target,
        presentation: &mut dyn Presentation,
        names: &dyn PlayerDirectory,
    ) -> GameResult<Vec<GameEvent>> {
        let Some(id) = self.table_of(player) else {
            warn!("[REGISTRY] Interaction from {:?}, who is not in a game", player);
            return Ok(vec![GameEvent::status(Rejection::NotInGame.to_string())]);
        };
        self.table_mut(id)?.interact(player, target, presentation, names)
    }

    /// Route a hover update to the player's table
    pub fn notify_hover(
        &mut self,
        player: PlayerId,
        at: Option<Coord>,
        presentation: &mut dyn Presentation,
    ) -> GameResult<Vec<GameEvent>> {
        let Some(id) = self.table_of(player) else {
            return Ok(vec![GameEvent::status(Rejection::NotInGame.to_string())]);
        };
        self.table_mut(id)?.notify_hover(at, presentation);
        Ok(Vec::new())
    }

    /// The player's unfinished table, else the most recent one they sat at
    pub fn table_of(&self, player: PlayerId) -> Option<TableId> {
        self.active_table_of(player).or_else(|| {
            self.tables
                .iter()
                .rev()
                .find(|table| table.side_of(player).is_some())
                .map(Table::id)
        })
    }

    pub fn table(&self, id: TableId) -> GameResult<&Table> {
        self.tables
            .get(id.0)
            .ok_or(GameError::UnknownTable { table: id })
    }

    fn table_mut(&mut self, id: TableId) -> GameResult<&mut Table> {
        self.tables
            .get_mut(id.0)
            .ok_or(GameError::UnknownTable { table: id })
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    fn active_table_of(&self, player: PlayerId) -> Option<TableId> {
        self.tables
            .iter()
            .find(|table| !table.is_complete() && table.side_of(player).is_some())
            .map(Table::id)
    }

    fn open_table(&self) -> Option<TableId> {
        self.tables
            .iter()
            .find(|table| !table.is_started())
            .map(Table::id)
    }

    fn create_table(
        &mut self,
        presentation: &mut dyn Presentation,
        events: &mut Vec<GameEvent>,
    ) -> GameResult<TableId> {
        let location = self
            .tables
            .last()
            .map(Table::location)
            .unwrap_or(TableLocation::new(-1, 0))
            .next();
        let id = TableId(self.tables.len());

        let mut table = Table::new(id, location, &self.settings)?;
        table.render(presentation)?;
        self.tables.push(table);

        info!("[REGISTRY] Creating new gameboard at {}", location);
        events.push(GameEvent::TableCreated {
            table: id,
            location,
        });
        events.push(GameEvent::status(format!(
            "Creating new gameboard at {}",
            location
        )));
        Ok(id)
    }
}
