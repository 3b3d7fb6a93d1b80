use std::path::PathBuf;

use anyhow::Result;
use mlua::{AnyUserData, Lua, Table, UserData, UserDataFields, Value as LuaValue};

use super::runner::run_task;
use super::session::ScriptSession;
use super::tasks::{ErrorTask, ExecTask, MakeDirTask, MessageTask, WarningTask};
use crate::config::ExecSettings;
use crate::domain::{HostSession, MessageImportance, Task, TaskError, TaskStatus};
use crate::infrastructure::SystemCommandExecutor;

/// `run_task` raises the failure message as a plain string so `pcall` sees it verbatim.
const PRELUDE: &str = r#"
function run_task(task)
  local ok, message = try_run_task(task)
  if not ok then
    error(message, 0)
  end
end
"#;

/// Task object handed to scripts.
pub struct ScriptTask {
    task: Box<dyn Task + Send>,
    status: TaskStatus,
}

impl ScriptTask {
    pub fn new(task: impl Task + Send + 'static) -> Self {
        Self {
            task: Box::new(task),
            status: TaskStatus::NotStarted,
        }
    }

    pub fn run(&mut self, session: &dyn HostSession) -> Result<(), TaskError> {
        self.status = TaskStatus::Running;
        let outcome = run_task(session, self.task.as_mut());
        self.status = TaskStatus::from_outcome(&outcome);
        outcome
    }
}

impl UserData for ScriptTask {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        fields.add_field_method_get("name", |_, this| Ok(this.task.name().to_string()));
        fields.add_field_method_get("status", |_, this| Ok(this.status.as_str()));
        fields.add_field_method_get("error", |_, this| {
            Ok(this.status.failure().map(str::to_string))
        });
    }
}

fn string_list(field: &str, value: LuaValue) -> mlua::Result<Vec<String>> {
    match value {
        LuaValue::String(s) => Ok(vec![s.to_str()?.to_string()]),
        LuaValue::Table(t) => t.sequence_values::<String>().collect(),
        _ => Err(mlua::Error::RuntimeError(format!(
            "{field} must be a string or table"
        ))),
    }
}

fn register_tasks(lua: &Lua, exec: &ExecSettings) -> Result<Table> {
    let tasks = lua.create_table()?;

    tasks.set(
        "message",
        lua.create_function(|_, params: Table| {
            let text: String = params.get("text")?;
            let importance = match params.get::<Option<String>>("importance")? {
                Some(raw) => raw
                    .parse::<MessageImportance>()
                    .map_err(mlua::Error::RuntimeError)?,
                None => MessageImportance::default(),
            };
            Ok(ScriptTask::new(MessageTask::new(text, importance)))
        })?,
    )?;

    tasks.set(
        "warning",
        lua.create_function(|_, params: Table| {
            let text: String = params.get("text")?;
            let code: Option<String> = params.get("code")?;
            Ok(ScriptTask::new(WarningTask::new(text, code)))
        })?,
    )?;

    tasks.set(
        "error",
        lua.create_function(|_, params: Table| {
            let text: String = params.get("text")?;
            let code: Option<String> = params.get("code")?;
            Ok(ScriptTask::new(ErrorTask::new(text, code)))
        })?,
    )?;

    tasks.set(
        "make_dir",
        lua.create_function(|_, params: Table| {
            let directories = string_list("directories", params.get("directories")?)?
                .into_iter()
                .map(PathBuf::from)
                .collect();
            Ok(ScriptTask::new(MakeDirTask::new(directories)))
        })?,
    )?;

    let executor = SystemCommandExecutor::new(exec.clone());
    tasks.set(
        "exec",
        lua.create_function(move |_, params: Table| {
            let command: String = params.get("command")?;
            let working_dir: Option<String> = params.get("working_dir")?;
            let ignore_exit_code: Option<bool> = params.get("ignore_exit_code")?;

            let task = ExecTask::new(executor.clone(), command)
                .working_dir(working_dir.map(PathBuf::from))
                .ignore_exit_code(ignore_exit_code.unwrap_or(false));
            Ok(ScriptTask::new(task))
        })?,
    )?;

    Ok(tasks)
}

fn register_host(lua: &Lua, session: &ScriptSession) -> Result<Table> {
    let host = lua.create_table()?;

    let s = session.clone();
    host.set(
        "info",
        lua.create_function(move |_, message: String| {
            s.info(&message);
            Ok(())
        })?,
    )?;

    let s = session.clone();
    host.set(
        "warn",
        lua.create_function(move |_, message: String| {
            s.warn(&message);
            Ok(())
        })?,
    )?;

    let s = session.clone();
    host.set(
        "error",
        lua.create_function(move |_, message: String| {
            s.error(&message);
            Ok(())
        })?,
    )?;

    Ok(host)
}

/// Register `run_task`, `try_run_task`, `host` and `tasks` in Lua
pub fn register_module(lua: &Lua, session: &ScriptSession, exec: &ExecSettings) -> Result<()> {
    let globals = lua.globals();

    let s = session.clone();
    let try_run_task = lua.create_function(move |_, task: AnyUserData| {
        let mut task = task.borrow_mut::<ScriptTask>()?;
        match task.run(&s) {
            Ok(()) => Ok((true, None)),
            Err(err) => Ok((false, Some(err.to_string()))),
        }
    })?;
    globals.set("try_run_task", try_run_task)?;

    globals.set("host", register_host(lua, session)?)?;
    globals.set("tasks", register_tasks(lua, exec)?)?;

    lua.load(PRELUDE).set_name("=prelude").exec()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lua() -> Lua {
        let lua = Lua::new();
        register_module(&lua, &ScriptSession::new("test"), &ExecSettings::default()).unwrap();
        lua
    }

    #[test]
    fn run_task_raises_accumulated_text() {
        let lua = lua();
        let message: String = lua
            .load(
                r#"
                local ok, err = pcall(run_task, tasks.error{ text = "disk full" })
                assert(not ok)
                return err
                "#,
            )
            .eval()
            .unwrap();

        assert_eq!(message, "disk full\r\n");
    }

    #[test]
    fn run_task_returns_nothing_on_success() {
        let lua = lua();
        let count: i64 = lua
            .load("return select('#', run_task(tasks.message{ text = 'starting' }))")
            .eval()
            .unwrap();

        assert_eq!(count, 0);
    }

    #[test]
    fn try_run_task_reports_instead_of_raising() {
        let lua = lua();
        let (ok, message): (bool, Option<String>) = lua
            .load("return try_run_task(tasks.warning{ text = 'careful', code = 'W1' })")
            .eval()
            .unwrap();

        assert!(ok);
        assert_eq!(message, None);
    }

    #[test]
    fn status_settles_after_each_run() {
        let lua = lua();
        let statuses: Vec<String> = lua
            .load(
                r#"
                local t = tasks.message{ text = "hi" }
                local seen = { t.status }
                run_task(t)
                table.insert(seen, t.status)
                run_task(t)
                table.insert(seen, t.status)
                return seen
                "#,
            )
            .eval()
            .unwrap();

        assert_eq!(statuses, vec!["not_started", "succeeded", "succeeded"]);
    }

    #[test]
    fn task_fields_track_last_run() {
        let lua = lua();
        let (name, before, after, error): (String, String, String, String) = lua
            .load(
                r#"
                local t = tasks.error{ text = "nope" }
                local before = t.status
                try_run_task(t)
                return t.name, before, t.status, t.error
                "#,
            )
            .eval()
            .unwrap();

        assert_eq!(name, "error");
        assert_eq!(before, "not_started");
        assert_eq!(after, "failed");
        assert_eq!(error, "nope\r\n");
    }

    #[test]
    fn unknown_importance_is_rejected_at_construction() {
        let lua = lua();
        let result = lua
            .load("return tasks.message{ text = 'x', importance = 'loud' }")
            .exec();

        assert!(result.is_err());
    }

    #[test]
    fn make_dir_accepts_string_or_list() {
        let temp = tempfile::tempdir().unwrap();
        let lua = lua();
        lua.globals()
            .set("root", temp.path().to_string_lossy().to_string())
            .unwrap();

        lua.load(
            r#"
            run_task(tasks.make_dir{ directories = root .. "/one" })
            run_task(tasks.make_dir{ directories = { root .. "/two", root .. "/three/four" } })
            "#,
        )
        .exec()
        .unwrap();

        assert!(temp.path().join("one").is_dir());
        assert!(temp.path().join("two").is_dir());
        assert!(temp.path().join("three/four").is_dir());
    }
}
