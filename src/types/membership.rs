use entity::sea_orm_active_enums::MembershipStatus;
use serde::Serialize;

use crate::types::error::AppError;

/// Everything that can happen to a (company, user) membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipAction {
    SendInvitation,
    CancelInvitation,
    AcceptInvitation,
    DeclineInvitation,
    SendRequest,
    CancelRequest,
    AcceptRequest,
    RejectRequest,
    RemoveMember,
    Leave,
    AppointAdmin,
    RemoveAdmin,
}

/// Who performs an action. Owner actions target another user, user
/// actions target the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Owner,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Set(MembershipStatus),
    Delete,
}

impl MembershipAction {
    pub fn actor(self) -> Actor {
        use MembershipAction::*;
        match self {
            SendInvitation | CancelInvitation | AcceptRequest | RejectRequest | RemoveMember
            | AppointAdmin | RemoveAdmin => Actor::Owner,
            AcceptInvitation | DeclineInvitation | SendRequest | CancelRequest | Leave => {
                Actor::User
            }
        }
    }

    /// Statuses the action starts from. `None` in the list means "no row yet".
    fn allowed_from(self) -> &'static [Option<MembershipStatus>] {
        use MembershipAction::*;
        use MembershipStatus as S;
        match self {
            SendInvitation => &[None, Some(S::Rejected)],
            SendRequest => &[None, Some(S::Declined)],
            CancelInvitation | AcceptInvitation | DeclineInvitation => &[Some(S::Invited)],
            CancelRequest | AcceptRequest | RejectRequest => &[Some(S::Requested)],
            RemoveMember | Leave => &[Some(S::Member), Some(S::Admin)],
            AppointAdmin => &[Some(S::Member)],
            RemoveAdmin => &[Some(S::Admin)],
        }
    }

    fn target(self) -> Transition {
        use MembershipAction::*;
        use MembershipStatus as S;
        match self {
            SendInvitation => Transition::Set(S::Invited),
            SendRequest => Transition::Set(S::Requested),
            AcceptInvitation | AcceptRequest | RemoveAdmin => Transition::Set(S::Member),
            DeclineInvitation => Transition::Set(S::Declined),
            RejectRequest => Transition::Set(S::Rejected),
            AppointAdmin => Transition::Set(S::Admin),
            CancelInvitation | CancelRequest | RemoveMember | Leave => Transition::Delete,
        }
    }

    /// Joining actions hit "already exists" when the user is already inside.
    fn is_joining(self) -> bool {
        !matches!(
            self,
            MembershipAction::RemoveMember
                | MembershipAction::Leave
                | MembershipAction::AppointAdmin
                | MembershipAction::RemoveAdmin
        )
    }

    pub fn apply(self, current: Option<MembershipStatus>) -> Result<Transition, AppError> {
        if self.allowed_from().contains(&current) {
            return Ok(self.target());
        }
        match current {
            None => Err(AppError::NotFound("Membership not found".to_string())),
            Some(status) if status.is_participant() && self.is_joining() => Err(
                AppError::AlreadyExists("User is already a member of the company".to_string()),
            ),
            Some(MembershipStatus::Admin) if self == MembershipAction::AppointAdmin => {
                Err(AppError::AlreadyExists("User is already an admin".to_string()))
            }
            Some(status) => Err(AppError::Conflict(format!(
                "Membership status {:?} is incompatible with this action",
                status
            ))),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct MembershipRes {
    pub company_id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub status: Option<MembershipStatus>,
}
