//! Tests for Taskfile resolution against real project trees

use std::cell::Cell;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use taskfile_core::{Cmd, Dep, Error, PROJECT_ROOT_VAR, ResolveOptions, Resolver, Var};
use taskfile_fs::path::relative_to;
use taskfile_test_utils::TestProject;

/// Platform name no real host uses, so host override files never interfere
const PLATFORM: &str = "testos";

fn resolver_for(project: &TestProject) -> Resolver {
    Resolver::new(ResolveOptions::new(project.root()).with_platform(PLATFORM))
}

fn relative_dir(project: &TestProject, dir: &Path) -> PathBuf {
    relative_to(project.root(), dir).expect("task dir should be under the project root")
}

mod root_only {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tasks_unchanged_except_names() {
        let project = TestProject::new();
        project.taskfile(
            r#"
version: '2'
vars:
  GREETING: hello
tasks:
  build:
    desc: Build everything
    cmds:
      - cargo build
  test:
    dir: crates
    cmds:
      - cmd: cargo test
"#,
        );

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        assert_eq!(manifest.version, "2");
        assert_eq!(manifest.tasks.len(), 2);
        let build = &manifest.tasks["build"];
        assert_eq!(build.name, "build");
        assert_eq!(build.desc, "Build everything");
        assert_eq!(build.cmds, vec![Cmd::new("cargo build")]);
        assert!(!build.has_dir());
        let test = &manifest.tasks["test"];
        assert_eq!(test.name, "test");
        assert_eq!(test.dir, PathBuf::from("crates"));
        assert_eq!(manifest.vars["GREETING"], Var::from("hello"));
    }

    #[test]
    fn test_task_calls_and_dependency_maps_are_carried_through() {
        let project = TestProject::new();
        project.taskfile(
            r#"
version: '2'
tasks:
  a:
    cmds: [echo a]
  b:
    deps:
      - a
      - task: a
        vars:
          X: 1
    cmds:
      - task: a
      - echo b
"#,
        );

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        let b = &manifest.tasks["b"];
        assert_eq!(b.deps.len(), 2);
        assert_eq!(b.deps[0], Dep::new("a"));
        assert_eq!(b.deps[1].task, "a");
        assert_eq!(b.deps[1].vars["X"], Var::from("1"));
        assert_eq!(b.cmds, vec![Cmd::call("a"), Cmd::new("echo b")]);
    }

    #[test]
    fn test_project_root_variable_is_injected() {
        let project = TestProject::new();
        project.taskfile("version: '2'\ntasks: {}\n");

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        let root = manifest.vars[PROJECT_ROOT_VAR].as_static().unwrap();
        assert_eq!(PathBuf::from(root), project.root());
        assert!(Path::new(root).is_absolute());
    }

    #[test]
    fn test_relative_start_dir_yields_absolute_project_root() {
        let project = TestProject::new();
        project.taskfile("version: '2'\ntasks: {}\n");
        project.mkdir("app");
        let resolver = Resolver::new(
            ResolveOptions::new(project.path("app")).with_platform(PLATFORM),
        );

        let manifest = resolver.resolve(Path::new("..")).unwrap();

        let root = manifest.vars[PROJECT_ROOT_VAR].as_static().unwrap();
        assert_eq!(PathBuf::from(root), project.root());
    }

    #[test]
    fn test_search_starts_from_nested_directory() {
        let project = TestProject::new();
        project.taskfile(
            "version: '2'\nincludes:\n  docs: docs\ntasks:\n  build:\n    cmds: [make]\n",
        );
        project.write("docs/Taskfile.yml", "version: '2'\ntasks:\n  serve:\n    cmds: [mkdocs serve]\n");
        let nested = project.mkdir("src/deep/module");

        let manifest = resolver_for(&project).resolve(&nested).unwrap();

        assert!(manifest.tasks.contains_key("build"));
        assert!(manifest.tasks.contains_key("docs:serve"));
        assert_eq!(
            manifest.vars[PROJECT_ROOT_VAR].as_static(),
            project.root().to_str()
        );
    }

    #[test]
    fn test_includes_are_not_retained() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  docs: docs\n");
        project.write("docs/Taskfile.yml", "version: '2'\ntasks: {}\n");

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        assert!(manifest.includes.is_empty());
    }

    #[test]
    fn test_summaries_are_sorted() {
        let project = TestProject::new();
        project.taskfile(
            "version: '2'\ntasks:\n  zeta:\n    desc: last\n  alpha:\n    desc: first\n",
        );

        let summaries = resolver_for(&project).resolve_tasks(project.root()).unwrap();

        let names: Vec<_> = summaries.iter().map(|s| s.task.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert_eq!(summaries[0].desc, "first");
    }
}

mod includes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_directory_include_is_namespaced_and_rerooted() {
        let project = TestProject::new();
        project.taskfile(
            "version: '2'\nincludes:\n  sub: included/sub\ntasks:\n  build:\n    cmds: [make]\n",
        );
        project.write(
            "included/sub/Taskfile.yml",
            "version: '2'\ntasks:\n  build:\n    cmds: [make sub]\n  lint:\n    cmds: [lint]\n",
        );

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        let keys: Vec<_> = manifest.tasks.keys().cloned().collect();
        assert_eq!(keys, vec!["build", "sub:build", "sub:lint"]);
        let sub_build = &manifest.tasks["sub:build"];
        assert_eq!(sub_build.name, "sub:build");
        assert_eq!(relative_dir(&project, &sub_build.dir), PathBuf::from("included/sub"));
        assert!(!manifest.tasks["build"].has_dir());
    }

    #[test]
    fn test_file_include_uses_its_parent_directory() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  ops: tools/ops.yml\n");
        project.write("tools/ops.yml", "version: '2'\ntasks:\n  deploy:\n    cmds: [./deploy.sh]\n");

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        let deploy = &manifest.tasks["ops:deploy"];
        assert_eq!(relative_dir(&project, &deploy.dir), PathBuf::from("tools"));
    }

    #[test]
    fn test_explicit_task_dir_is_joined_with_root_directory() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  web: frontend\n");
        project.write(
            "frontend/Taskfile.yml",
            "version: '2'\ntasks:\n  assets:\n    dir: frontend/./assets\n    cmds: [build-assets]\n",
        );

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        let assets = &manifest.tasks["web:assets"];
        assert_eq!(assets.dir, project.root().join("frontend/assets"));
    }

    #[test]
    fn test_include_relative_to_found_manifest_not_start_dir() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  lib: lib\n");
        project.write("lib/Taskfile.yml", "version: '2'\ntasks:\n  check:\n    cmds: [check]\n");
        let start = project.mkdir("lib/nested");

        let manifest = resolver_for(&project).resolve(&start).unwrap();

        assert_eq!(
            relative_dir(&project, &manifest.tasks["lib:check"].dir),
            PathBuf::from("lib")
        );
    }

    #[test]
    fn test_nested_includes_are_forbidden() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  outer: outer\n");
        project.write(
            "outer/Taskfile.yml",
            "version: '2'\nincludes:\n  inner: inner\ntasks:\n  a:\n    cmds: [a]\n",
        );
        project.write("outer/inner/Taskfile.yml", "version: '2'\ntasks: {}\n");

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        match err {
            Error::NestedIncludesForbidden { namespace, path } => {
                assert_eq!(namespace, "outer");
                assert_eq!(path, project.path("outer/Taskfile.yml"));
            }
            other => panic!("expected NestedIncludesForbidden, got {other:?}"),
        }
    }

    #[test]
    fn test_namespaced_key_colliding_with_root_task_fails() {
        let project = TestProject::new();
        project.taskfile(
            "version: '2'\nincludes:\n  docs: docs\ntasks:\n  \"docs:build\":\n    cmds: [echo root]\n",
        );
        project.write("docs/Taskfile.yml", "version: '2'\ntasks:\n  build:\n    cmds: [mkdocs build]\n");

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(matches!(err, Error::DuplicateTask { ref name } if name == "docs:build"));
    }

    #[test]
    fn test_missing_include_is_not_found() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  ghost: does/not/exist\n");

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(err.is_not_found(), "expected NotFound, got {err:?}");
    }

    #[test]
    fn test_directory_include_without_taskfile_is_not_found() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  empty: empty\n");
        project.mkdir("empty");

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(err.is_not_found(), "expected NotFound, got {err:?}");
    }

    #[test]
    fn test_non_utf8_include_is_malformed_not_missing() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  docs: docs\n");
        project.write_bytes(
            "docs/Taskfile.yml",
            b"version: '2'\ntasks:\n  serve:\n    desc: caf\xe9\n",
        );

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(err.is_malformed(), "expected MalformedDocument, got {err:?}");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_included_task_calls_keep_their_target_names() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  docs: docs\n");
        project.write(
            "docs/Taskfile.yml",
            "version: '2'\ntasks:\n  build:\n    cmds: [mkdocs build]\n  publish:\n    deps: [{task: build}]\n    cmds: [{task: build}]\n",
        );

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        let publish = &manifest.tasks["docs:publish"];
        assert_eq!(publish.deps, vec![Dep::new("build")]);
        assert_eq!(publish.cmds, vec![Cmd::call("build")]);
    }

    #[test]
    fn test_malformed_include_is_reported() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  bad: bad.yml\n");
        project.write("bad.yml", "tasks: [this is: not, a map\n");

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(err.is_malformed(), "expected MalformedDocument, got {err:?}");
        assert!(err.to_string().contains("bad.yml"));
    }

    #[test]
    fn test_includes_are_processed_in_lexicographic_order() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  zz: zz-missing\n  aa: aa-missing\n");

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        match err {
            Error::Fs(taskfile_fs::Error::NotFound { path, .. }) => {
                assert_eq!(path, project.path("aa-missing"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_include_vars_override_root_vars() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  lib: lib\nvars:\n  MODE: dev\n");
        project.write("lib/Taskfile.yml", "version: '2'\nvars:\n  MODE: release\ntasks: {}\n");

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        assert_eq!(manifest.vars["MODE"], Var::from("release"));
    }
}

mod package_json {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_script_list_include_synthesizes_tasks() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  web: web/package.json\n");
        project.package_json("web", &[("build", "webpack"), ("test", "jest")]);

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        let build = &manifest.tasks["web:build"];
        assert_eq!(build.name, "web:build");
        assert_eq!(build.cmds, vec![Cmd::new("pnpm run build")]);
        assert_eq!(build.desc, "→ web/package.json:3");
        assert_eq!(relative_dir(&project, &build.dir), PathBuf::from("web"));
        assert_eq!(manifest.tasks["web:test"].desc, "→ web/package.json:4");
    }

    #[test]
    fn test_configured_package_manager_is_used() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  js: package.json\n");
        project.package_json(".", &[("lint", "eslint .")]);
        let resolver = Resolver::new(
            ResolveOptions::new(project.root())
                .with_platform(PLATFORM)
                .with_package_manager("npm"),
        );

        let manifest = resolver.resolve(project.root()).unwrap();

        assert_eq!(manifest.tasks["js:lint"].cmds, vec![Cmd::new("npm run lint")]);
    }

    #[test]
    fn test_non_utf8_script_list_is_malformed_not_missing() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  web: web/package.json\n");
        project.write_bytes(
            "web/package.json",
            b"{\n  \"scripts\": {\"build\": \"echo caf\xe9\"}\n}\n",
        );

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(err.is_malformed(), "expected MalformedDocument, got {err:?}");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_script_list_directory_include_uses_taskfile_not_package_json() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  web: web\n");
        project.package_json("web", &[("build", "webpack")]);

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(err.is_not_found(), "expected NotFound, got {err:?}");
    }
}

mod platform_override {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_override_adds_tasks_without_namespace() {
        let project = TestProject::new();
        project.taskfile("version: '2'\ntasks:\n  build:\n    cmds: [make]\n");
        project.platform_override(PLATFORM, "version: '2'\ntasks:\n  package:\n    cmds: [pkgbuild]\n");

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        assert_eq!(manifest.tasks["package"].name, "package");
        assert_eq!(manifest.tasks["package"].cmds, vec![Cmd::new("pkgbuild")]);
        assert!(manifest.tasks.contains_key("build"));
    }

    #[test]
    fn test_override_collides_with_root_task() {
        let project = TestProject::new();
        project.taskfile("version: '2'\ntasks:\n  build:\n    cmds: [make]\n");
        project.platform_override(PLATFORM, "version: '2'\ntasks:\n  build:\n    cmds: [nmake]\n");

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(matches!(err, Error::DuplicateTask { ref name } if name == "build"));
    }

    #[test]
    fn test_override_collides_with_namespaced_include_task() {
        let project = TestProject::new();
        project.taskfile("version: '2'\nincludes:\n  docs: docs\n");
        project.write("docs/Taskfile.yml", "version: '2'\ntasks:\n  build:\n    cmds: [mkdocs]\n");
        project.platform_override(
            PLATFORM,
            "version: '2'\ntasks:\n  \"docs:build\":\n    cmds: [mkdocs.exe]\n",
        );

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(matches!(err, Error::DuplicateTask { ref name } if name == "docs:build"));
    }

    #[test]
    fn test_other_platform_override_is_ignored() {
        let project = TestProject::new();
        project.taskfile("version: '2'\ntasks:\n  build:\n    cmds: [make]\n");
        project.platform_override("otheros", "version: '2'\ntasks:\n  build:\n    cmds: [x]\n");

        let manifest = resolver_for(&project).resolve(project.root()).unwrap();

        assert_eq!(manifest.tasks["build"].cmds, vec![Cmd::new("make")]);
    }

    #[test]
    fn test_override_with_includes_is_forbidden() {
        let project = TestProject::new();
        project.taskfile("version: '2'\ntasks: {}\n");
        project.platform_override(PLATFORM, "version: '2'\nincludes:\n  x: x\n");

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(matches!(err, Error::NestedIncludesForbidden { .. }));
    }

    #[test]
    fn test_malformed_override_is_reported() {
        let project = TestProject::new();
        project.taskfile("version: '2'\ntasks: {}\n");
        project.platform_override(PLATFORM, "tasks: [oops\n");

        let err = resolver_for(&project).resolve(project.root()).unwrap_err();

        assert!(err.is_malformed(), "expected MalformedDocument, got {err:?}");
    }
}

mod locator {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_manifest_found_reads_nothing_else() {
        let project = TestProject::new();
        // Would fail to parse if the resolver ever looked at it
        project.platform_override(PLATFORM, "tasks: [broken\n");
        let calls = Cell::new(0);
        let locator = |_: &Path, _: &str| -> taskfile_fs::Result<Option<PathBuf>> {
            calls.set(calls.get() + 1);
            Ok(None)
        };
        let resolver = Resolver::with_locator(
            locator,
            ResolveOptions::new(project.root()).with_platform(PLATFORM),
        );

        let err = resolver.resolve(project.root()).unwrap_err();

        assert!(matches!(err, Error::NoManifestFound { ref dir } if dir == project.root()));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_injected_locator_decides_root_manifest() {
        let project = TestProject::new();
        let root = project.write("elsewhere/Taskfile.yml", "version: '2'\ntasks:\n  hi:\n    cmds: [echo hi]\n");
        let locator = move |_: &Path, name: &str| -> taskfile_fs::Result<Option<PathBuf>> {
            assert_eq!(name, "Taskfile.yml");
            Ok(Some(root.clone()))
        };
        let resolver = Resolver::with_locator(
            locator,
            ResolveOptions::new(project.root()).with_platform(PLATFORM),
        );

        let manifest = resolver.resolve(Path::new("/nonexistent")).unwrap();

        assert_eq!(manifest.tasks["hi"].name, "hi");
        assert_eq!(
            manifest.vars[PROJECT_ROOT_VAR].as_static(),
            project.path("elsewhere").to_str()
        );
    }

    #[test]
    fn test_relative_located_path_is_read_against_configured_cwd() {
        let project = TestProject::new();
        project.write("app/Taskfile.yml", "version: '2'\ntasks:\n  hi:\n    cmds: [echo hi]\n");
        let locator = |_: &Path, _: &str| -> taskfile_fs::Result<Option<PathBuf>> {
            Ok(Some(PathBuf::from("app/Taskfile.yml")))
        };
        let resolver = Resolver::with_locator(
            locator,
            ResolveOptions::new(project.root()).with_platform(PLATFORM),
        );

        let manifest = resolver.resolve(project.root()).unwrap();

        assert_eq!(manifest.tasks["hi"].name, "hi");
        assert_eq!(
            manifest.vars[PROJECT_ROOT_VAR].as_static(),
            project.path("app").to_str()
        );
    }

    #[test]
    fn test_real_search_without_manifest_fails() {
        let project = TestProject::new();
        let start = project.mkdir("empty");
        let resolver = Resolver::with_locator(
            |start: &Path, name: &str| -> taskfile_fs::Result<Option<PathBuf>> {
                // Confine the walk to the temp dir so a stray Taskfile above it can't match
                let candidate = start.join(name);
                Ok(candidate.is_file().then_some(candidate))
            },
            ResolveOptions::new(project.root()).with_platform(PLATFORM),
        );

        let err = resolver.resolve(&start).unwrap_err();

        assert!(matches!(err, Error::NoManifestFound { .. }));
    }
}
