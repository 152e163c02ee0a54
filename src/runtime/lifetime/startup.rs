use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何用户，则创建默认部门/团队和一个 admin 账号
async fn seed_admin(storage: &Arc<dyn Storage>) {
    // 检查是否已有用户
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    // 管理员账号也要挂在部门/团队下，缺省目录不存在时先补齐
    let department = match storage.get_department_by_name("General").await {
        Ok(Some(department)) => department,
        Ok(None) => match storage.create_department("General").await {
            Ok(department) => department,
            Err(e) => {
                warn!("Failed to create default department: {}, skipping admin seed", e);
                return;
            }
        },
        Err(e) => {
            warn!("Failed to look up default department: {}, skipping admin seed", e);
            return;
        }
    };

    let team = match storage.list_teams_by_department(department.id).await {
        Ok(teams) if !teams.is_empty() => teams.into_iter().next().expect("checked non-empty"),
        Ok(_) => match storage.create_team(department.id, "Operations").await {
            Ok(team) => team,
            Err(e) => {
                warn!("Failed to create default team: {}, skipping admin seed", e);
                return;
            }
        },
        Err(e) => {
            warn!("Failed to look up default team: {}, skipping admin seed", e);
            return;
        }
    };

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    // 哈希密码
    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    // 创建管理员账号
    let admin_request = CreateUserRequest {
        username: "admin".to_string(),
        email: "admin@localhost.localdomain".to_string(),
        password: password_hash,
        department: department.id,
        team: team.id,
    };

    match storage.create_user(admin_request, UserRole::Admin).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, username: {})",
                user.id, user.username
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    StartupContext { storage }
}
